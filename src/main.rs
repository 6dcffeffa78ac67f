// Line-oriented move adapter
//
// Reads one Battlesnake game state (JSON) per line from a file or stdin and
// writes one `{"move": "..."}` line per state to stdout. A line that fails to
// parse is reported and skipped.
//
// Usage:
//   greedy-snake [--config <path>] [states.jsonl]

use log::{error, info};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use greedy_snake::bot::Bot;
use greedy_snake::config::Config;
use greedy_snake::types::GameState;

fn print_usage() {
    eprintln!("Battlesnake Move Selector");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  greedy-snake [OPTIONS] [states.jsonl]");
    eprintln!();
    eprintln!("Reads game states from the file, or stdin when no file is given.");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --config <path>         Path to Snake.toml (default: Snake.toml)");
    eprintln!("  --help                  Show this help message");
}

fn run<R: BufRead, W: Write>(bot: &Bot, input: R, mut output: W) -> Result<(), String> {
    for (line_num, line) in input.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

        if line.trim().is_empty() {
            continue;
        }

        let state: GameState = match serde_json::from_str(&line) {
            Ok(state) => state,
            Err(e) => {
                error!("Skipping line {}: {}", line_num + 1, e);
                continue;
            }
        };

        writeln!(output, "{}", bot.get_move(&state))
            .and_then(|_| output.flush())
            .map_err(|e| format!("Failed to write move: {}", e))?;
    }

    Ok(())
}

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path = None;
    let mut input_path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("Error: --config requires an argument");
                    process::exit(1);
                };
                config_path = Some(path.clone());
                i += 1;
            }
            "--help" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", other);
                print_usage();
                process::exit(1);
            }
            path => input_path = Some(path.to_string()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => Config::load_or_default(),
    };

    info!("Starting move selector...");
    let bot = Bot::new(config);

    let stdout = io::stdout();
    let result = match input_path {
        Some(path) => match File::open(&path) {
            Ok(file) => run(&bot, BufReader::new(file), stdout.lock()),
            Err(e) => Err(format!("Failed to open '{}': {}", path, e)),
        },
        None => run(&bot, io::stdin().lock(), stdout.lock()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
