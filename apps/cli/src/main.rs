use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    cap_title, config::load_settings, project, ChatsApi, HttpChatsApi, Locale,
    SubmissionController, SubmissionStatus, ViewOptions,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod render;

use render::render_text;

/// Creates a chat through the chats API and prints the result.
#[derive(Parser, Debug)]
struct Args {
    /// API base url; overrides chat_form.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Language for messages and timestamps (en, ru).
    #[arg(long)]
    locale: Option<Locale>,
    /// Chat title. Without it, one title is read per line from stdin.
    title: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut settings = load_settings().context("failed to load settings")?;
    if let Some(url) = args.server_url {
        settings.api_base_url = url;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = HttpChatsApi::new(&settings.api_base_url)
        .with_context(|| format!("invalid api base url {}", settings.api_base_url))?;
    tracing::info!(url = api.chats_url(), locale = %settings.locale, "chat cli ready");

    let options = ViewOptions::local(settings.locale);
    let mut controller = SubmissionController::new(settings.locale);

    if let Some(title) = args.title {
        let ok = submit_title(&mut controller, &api, &options, title).await;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        submit_title(&mut controller, &api, &options, line).await;
    }
    Ok(ExitCode::SUCCESS)
}

/// One form submission. Returns whether the chat was created.
async fn submit_title<A>(
    controller: &mut SubmissionController,
    api: &A,
    options: &ViewOptions,
    title: String,
) -> bool
where
    A: ChatsApi + ?Sized,
{
    let full_len = title.chars().count();
    let title = cap_title(title);
    if title.chars().count() < full_len {
        tracing::warn!(full_len, "title cut to the input limit");
    }
    controller.update_title(title);
    if !controller.form().is_submittable() {
        eprintln!("{}", options.locale.messages().title_required);
        return false;
    }

    controller.submit(api).await;
    print!("{}", render_text(&project(controller, options)));
    matches!(controller.status(), SubmissionStatus::Succeeded(_))
}
