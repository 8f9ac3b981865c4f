use std::io::IsTerminal;

use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use todoform::{run_lines, step, Step, UreqTransport};
use todoform_core::{Command, PostsClient, Syncer, TodoSession, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todoform")]
#[command(about = "Todo list backed by a /posts REST resource")]
#[command(long_about = "Todo list backed by a /posts REST resource.\n\n\
    Prompts interactively when stdin is a terminal. Otherwise reads one \
    command per line from stdin, e.g. `printf 'add milk\\nclear\\n' | todoform`.")]
struct Cli {
    /// Base URL of the posts backend
    #[arg(short, long, env = "TODOFORM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Failures are only reported here, so warnings stay on by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(base_url = %cli.base_url, "starting");

    let syncer = Syncer::new(PostsClient::new(&cli.base_url), UreqTransport::new());
    let mut session = TodoSession::new(syncer);
    session.handle(Command::Load).await;
    println!("{}", todoform::render(session.state()));

    if !std::io::stdin().is_terminal() {
        run_lines(&mut session, std::io::stdin().lock(), std::io::stdout().lock()).await?;
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("todo")
            .allow_empty(true)
            .interact_text()?;
        match step(&mut session, &line).await {
            Step::Continue(output) => println!("{output}"),
            Step::Quit => break,
        }
    }
    Ok(())
}
