//! Terminal front end: a human plays the computer by typing moves.
//!
//! ```text
//! chess_ai [--black] [--difficulty easy|medium|hard|expert] [--parallel] [--fen "<board notation>"]
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see every
//! search depth.

use std::io::{self, BufRead, Write};

use log::error;

use chess_ai::agent::{Difficulty, NegamaxPlayer, Player};
use chess_ai::game::{Game, GameConfig};
use chess_ai::game_repr::{Color, Square};

fn print_help() {
    println!("Commands:");
    println!("  e2e4 / e7e8q   - play a move (promotion piece optional, queen by default)");
    println!("  moves <square> - list legal moves of your piece on a square");
    println!("  undo           - take back your last move and the reply");
    println!("  history        - show the moves played so far");
    println!("  fen            - print the position in board notation");
    println!("  restart        - start over");
    println!("  help           - this text");
    println!("  quit           - exit");
}

fn parse_args() -> Result<GameConfig, String> {
    let mut config = GameConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--black" => config.human_color = Color::Black,
            "--white" => config.human_color = Color::White,
            "--parallel" => config.parallel = true,
            "--difficulty" => {
                let name = args.next().ok_or("--difficulty needs a value")?;
                config.difficulty =
                    Difficulty::from_name(&name).ok_or_else(|| format!("unknown difficulty {:?}", name))?;
            }
            "--fen" => config.start_fen = Some(args.next().ok_or("--fen needs a value")?),
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(config)
}

fn print_position(game: &Game) {
    println!("{:?}", game.state().board);
    match game.king_in_check() {
        Some(color) => println!("{} king is in check!", color),
        None => println!("Turn: {}", game.side_to_move()),
    }
    for color in [Color::White, Color::Black] {
        let lost = game.captured(color);
        if !lost.is_empty() {
            let names: Vec<String> = lost.iter().map(|p| p.code()).collect();
            println!("{} lost: {}", color, names.join(" "));
        }
    }
}

fn computer_turn(game: &mut Game, ai: &mut NegamaxPlayer) {
    println!("{} is thinking...", ai.name());
    match game.play_player_move(ai) {
        Ok(mv) => {
            if let Some(stats) = ai.last_search() {
                println!(
                    "{} plays {} (depth {}, score {}, {} nodes, {} ms)",
                    ai.name(),
                    mv,
                    stats.depth_reached,
                    stats.score,
                    stats.nodes,
                    stats.time_ms
                );
            }
        }
        Err(e) => error!("computer could not move: {}", e),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let mut game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut ai = NegamaxPlayer::with_difficulty(config.difficulty);
    ai.set_parallel(config.parallel);

    println!(
        "You play {} against {}. Type 'help' for commands.",
        config.human_color,
        ai.name()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !game.is_over() && game.side_to_move() == config.ai_color() {
            computer_turn(&mut game, &mut ai);
        }

        print_position(&game);
        if let Some(outcome) = game.outcome() {
            println!("{} Type 'restart' to play again or 'quit'.", outcome);
        }

        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["fen"] => println!("{}", game.state().to_fen()),
            ["history"] => {
                for (i, entry) in game.history().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, entry);
                }
            }
            ["restart"] => game.reset(),
            ["undo"] => {
                // back to the last position where it was the human's turn
                game.undo();
                if game.side_to_move() != config.human_color {
                    game.undo();
                }
            }
            ["moves", square] => match square.parse::<Square>() {
                Ok(square) => {
                    let targets: Vec<String> = game.legal_moves_from(square).iter().map(|mv| mv.to_coordinate()).collect();
                    println!("{}", if targets.is_empty() { "no legal moves".to_string() } else { targets.join(" ") });
                }
                Err(e) => println!("{}", e),
            },
            [text] => match game.play_coordinate(text) {
                Ok(mv) => ai.opponent_moved(mv),
                Err(e) => println!("{}", e),
            },
            _ => println!("unknown command, type 'help'"),
        }
    }

    Ok(())
}
