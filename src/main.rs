//! # Tallyline Main Entry Point
//!
//! Thin presentation driver over the calculator engine: maps text tokens
//! to keypad events, presses them in order, and prints the display.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tallyline::cmd_args::CommandLineArgs;
use tallyline::config;
use tallyline::engine::{CalculatorEngine, InputEvent};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the display output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let mut engine = CalculatorEngine::new();

    if args.tokens().is_empty() {
        run_stdin(&mut engine, &args)
    } else {
        for token in args.tokens() {
            let event: InputEvent = token
                .parse()
                .with_context(|| format!("cannot press '{token}'"))?;
            engine.press(event);
            if args.each() {
                report(&engine, &args)?;
            }
        }
        if !args.each() {
            report(&engine, &args)?;
        }
        Ok(())
    }
}

/// Read whitespace-separated tokens line by line, pressing each and
/// printing the display after every line. Unknown tokens are reported
/// and skipped so a typo never ends the session.
fn run_stdin(engine: &mut CalculatorEngine, args: &CommandLineArgs) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("tallyline keypad calculator");
        println!("Enter keypad tokens separated by spaces: 0-9 . + - * / = del reset");
        println!("Press Ctrl+D to quit");
    }

    let prompt = config::get_prompt();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        if interactive {
            print!("{prompt}");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if input.read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            match token.parse::<InputEvent>() {
                Ok(event) => engine.press(event),
                Err(err) => eprintln!("{err}"),
            }
        }
        report(engine, args)?;
    }
    Ok(())
}

/// Print the current display, or the full snapshot when `--json` is set
fn report(engine: &CalculatorEngine, args: &CommandLineArgs) -> Result<()> {
    if args.json() {
        println!("{}", serde_json::to_string(&engine.snapshot())?);
    } else {
        println!("{}", engine.display_text());
    }
    Ok(())
}
