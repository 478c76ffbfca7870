use aire::assistant::{CompletionClient, GeminiClient};
use aire::config::{Cli, Config};
use aire::sources::SupabaseListings;
use aire::{render, Session};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the transcript stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(Cli::parse()).context("Invalid configuration")?;

    let listings = SupabaseListings::new(config.supabase.clone())
        .context("Failed to create listings client")?;
    let completions =
        GeminiClient::new(config.gemini.clone()).context("Failed to create Gemini client")?;

    info!("🏠 AIRE - listings assistant using {}", completions.model_name());

    let mut session = Session::new(Arc::new(listings), Arc::new(completions));

    println!("{}\n", render::banner());
    session.load_featured().await;
    println!("{}\n", render::cards(session.featured()));
    println!("{}\n", render::help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => println!("{}", render::help()),
            "/cards" => println!("{}", render::cards(session.featured())),
            "/more" => {
                let added = session.view_more().await;
                if added == 0 {
                    println!("No new properties this time.");
                }
                println!("{}", render::cards(session.featured()));
            }
            cmd if cmd.starts_with("/show") => {
                let card = cmd
                    .trim_start_matches("/show")
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| session.select(i));
                match card {
                    Some(card) => println!("{}", render::detail(card)),
                    None => println!("Usage: /show N (1-{})", session.featured().len()),
                }
            }
            message => {
                let bar = show_progress(&session);
                let reply = session.send_message(message).await.cloned();
                bar.abort();
                eprintln!("\r{}", render::progress_bar(session.progress().value()));
                session.progress().reset();

                if let Some(reply) = reply {
                    println!("{}", render::message(&reply));
                    if reply.properties.as_ref().map_or(false, |p| !p.is_empty()) {
                        println!("\n{}", render::cards(session.featured()));
                    }
                }
            }
        }
        println!();
    }

    info!("👋 Bye");
    Ok(())
}

/// Redraw the progress bar on stderr whenever the value moves
fn show_progress(session: &Session) -> JoinHandle<()> {
    let mut rx = session.progress().subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            eprint!("\r{}", render::progress_bar(value));
        }
    })
}
