use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use yoga_studio::api::{ApiClient, Services};
use yoga_studio::cli::{Reply, Shell};
use yoga_studio::config::ClientConfig;
use yoga_studio::identity::{SessionFile, SessionStore};
use yoga_studio::ui::{Route, ViewContext};

/// Terminal client for the yoga studio booking API.
#[derive(Parser, Debug)]
#[command(name = "studio", version, about)]
struct Args {
    /// Base URL of the API (overrides STUDIO_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Keep the login in this file between runs (overrides STUDIO_SESSION_FILE)
    #[arg(long)]
    session_file: Option<PathBuf>,
    /// Run one command and exit
    #[arg(short = 'c', long)]
    command: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(path) = args.session_file {
        config = config.with_session_file(path);
    }
    info!(target: "studio", api = %config.api_url, timeout_secs = config.timeout.as_secs(), "starting");

    let store = Arc::new(match &config.session_file {
        Some(path) => SessionStore::with_file(SessionFile::new(path)),
        None => SessionStore::new(),
    });
    let client = ApiClient::new(&config, Arc::clone(&store)).context("failed to build HTTP client")?;
    let ctx = ViewContext::new(store);
    ctx.router.navigate(Route::Root);
    let shell = Shell::new(Services::http(client), ctx, config.api_url.as_str());

    if let Some(line) = args.command {
        return match shell.execute(&line).await {
            Ok(reply) => {
                print_reply(reply);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", Shell::error_line(&e));
                std::process::exit(1);
            }
        };
    }

    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    println!("studio {}. Type 'help' for commands.", config.api_url);
    loop {
        let line = match editor.readline("studio> ") {
            Ok(l) => l,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);
        match shell.execute(line).await {
            Ok(Reply::Quit) => break,
            Ok(reply) => print_reply(reply),
            Err(e) => eprintln!("{}", Shell::error_line(&e)),
        }
    }
    Ok(())
}

fn print_reply(reply: Reply) {
    if let Reply::Lines(lines) = reply {
        for l in lines {
            println!("{}", l);
        }
    }
}
