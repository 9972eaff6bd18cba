use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reply_assistant::engine::{EngineEvent, SuggestionEngine};

/// Keyboard commands read from stdin, one per line.
enum Command {
    Like(usize),
    CopyAll,
    ClearContext,
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "a" => Some(Command::CopyAll),
        "c" => Some(Command::ClearContext),
        "s" => Some(Command::Status),
        "h" | "?" => Some(Command::Help),
        "q" => Some(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .map(|n| Command::Like(n - 1)),
    }
}

/// `run` — poll the clipboard until Ctrl-C or `q`.
pub fn run() -> Result<()> {
    let config = super::bootstrap();
    let poll = Duration::from_millis(config.poll_interval_ms.max(50));
    let mut engine = super::build_engine(config);

    let shutdown = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, shutdown.clone())
        .context("Failed to register SIGINT handler")?;
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGTERM, shutdown.clone())
        .context("Failed to register SIGTERM handler")?;

    let commands = spawn_stdin_reader()?;

    println!("{}", engine.status());
    print_help();

    while !shutdown.load(Ordering::Relaxed) {
        loop {
            match commands.try_recv() {
                Ok(Command::Quit) => shutdown.store(true, Ordering::Relaxed),
                Ok(cmd) => handle_command(&mut engine, cmd),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let events = engine.tick();
        report(&engine, &events);
        std::thread::sleep(poll);
    }

    tracing::info!("Reply assistant stopped");
    Ok(())
}

fn spawn_stdin_reader() -> Result<Receiver<Command>> {
    let (tx, rx) = channel();
    std::thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse_command(&line) {
                    Some(cmd) => {
                        if tx.send(cmd).is_err() {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => eprintln!("Unknown command: {} (h for help)", line.trim()),
                }
            }
        })
        .context("Failed to spawn stdin reader")?;
    Ok(rx)
}

fn handle_command(engine: &mut SuggestionEngine, cmd: Command) {
    let events = match cmd {
        Command::Like(idx) => match engine.suggestions().get(idx).cloned() {
            Some(text) => engine.like(&text),
            None => {
                println!("No suggestion #{}", idx + 1);
                return;
            }
        },
        Command::CopyAll => engine.copy_all(),
        Command::ClearContext => engine.clear_context(),
        Command::Status => {
            let view = engine.view();
            println!(
                "[{}] {} | context {} | style profile: {}",
                view.state.as_str(),
                view.status,
                view.context_len,
                if view.has_style_profile { "yes" } else { "no" }
            );
            return;
        }
        Command::Help => {
            print_help();
            return;
        }
        Command::Quit => return,
    };
    report(engine, &events);
}

fn report(engine: &SuggestionEngine, events: &[EngineEvent]) {
    if events.is_empty() {
        return;
    }
    for event in events {
        match event {
            EngineEvent::GenerationStarted { message, .. } => {
                println!();
                println!("> {}", message);
            }
            EngineEvent::SuggestionsReady { suggestions } => {
                for (i, s) in suggestions.iter().enumerate() {
                    println!("  {}. {}", i + 1, s);
                }
            }
            EngineEvent::StyleProfileUpdated { sample_count } => {
                println!("  style profile updated ({} samples)", sample_count);
            }
            _ => {}
        }
    }
    println!("  [{}]", engine.status());
}

fn print_help() {
    println!("Commands: 1-3 like and copy | a copy all | c clear context | s status | q quit");
}
