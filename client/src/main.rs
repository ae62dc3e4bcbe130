mod command;
mod config;
mod view;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use command::{Command, HELP_TEXT, parse_command};
use tictactoe_engine::game::GameEngine;
use tictactoe_engine::{log, logger};
use view::{LatestUpdate, TerminalView};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print engine log lines.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective config back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(args.config);
    let config = config_manager.get_config()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        println!("Config saved");
        return Ok(());
    }

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let view = TerminalView::new(config.game.clone(), config.show_cell_numbers);
    let latest = LatestUpdate::default();
    let mut engine = GameEngine::new();
    engine.subscribe(Box::new(latest.clone()));

    let mut out = io::stdout().lock();
    writeln!(out, "{}\n", view.title())?;
    engine.reset();
    if let Some(update) = latest.take() {
        writeln!(out, "{}\n", view.render(&update))?;
    }
    write!(out, "{}", view.prompt(false))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP_TEXT)?,
            Ok(Command::Reset) => {
                engine.reset();
            }
            Ok(Command::Move(index)) => {
                let previous_reply = engine.last_computer_move();
                match engine.apply_human_move(index) {
                    Ok(_) => {
                        if let Some(reply) = engine.last_computer_move()
                            && Some(reply) != previous_reply
                        {
                            writeln!(out, "Computer plays {}", reply + 1)?;
                        }
                    }
                    Err(e) => {
                        log!("Rejected move {}: {}", index, e);
                        writeln!(out, "{}", view.describe_error(&e))?;
                    }
                }
            }
            Err(message) => writeln!(out, "{}", message)?,
        }

        if let Some(update) = latest.take() {
            writeln!(out, "\n{}\n", view.render(&update))?;
        }
        write!(out, "{}", view.prompt(engine.outcome().is_over()))?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
