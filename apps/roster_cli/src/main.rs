use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use client_core::HttpActivitiesClient;
use roster_ui::{
    page::{text, FeedbackMessage},
    AppController, FeedbackPresenter, FormSubmitEvent,
};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, normalize_server_url, DEFAULT_SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(about = "Browse extracurricular activities and manage signups")]
struct Args {
    /// Activities API base url; overrides the settings file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long)]
    hide_after_ms: Option<u64>,
    /// Keep running until the feedback message expires.
    #[arg(long)]
    follow_feedback: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current roster.
    Show,
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(server_url) = &args.server_url {
        settings.server_url = normalize_server_url(server_url);
    }
    if let Some(ms) = args.hide_after_ms {
        settings.feedback_hide_after_ms = ms;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = HttpActivitiesClient::new(&settings.server_url)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    let app = AppController::new(
        Arc::new(client),
        FeedbackPresenter::new(Duration::from_millis(settings.feedback_hide_after_ms)),
    );

    let loaded = app.init().await;
    let page = app.page().await;
    print!("{}", text::render_list(&page.activities_list));

    let outcome = match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            loaded.context("failed to load activities")?;
            println!("Activities: {}", text::render_select(&page.form.activity));
            return Ok(());
        }
        Command::Signup { activity, email } => {
            if !app.fill_form(&activity, &email).await {
                tracing::warn!(activity = %activity, "activity is not in the rendered roster");
            }
            app.on_submit(&mut FormSubmitEvent::new()).await
        }
        Command::Unregister { activity, email } => app.on_unregister(&activity, &email).await,
    };

    let mut feedback = app.subscribe_feedback();
    if let Some(line) = text::render_feedback(&feedback.borrow_and_update()) {
        println!("{line}");
    }
    if args.follow_feedback {
        wait_until_hidden(&mut feedback).await;
        println!("(message dismissed)");
    }

    if outcome.is_success() {
        Ok(())
    } else {
        Err(anyhow!("{}", outcome.text()))
    }
}

async fn wait_until_hidden(feedback: &mut watch::Receiver<FeedbackMessage>) {
    while feedback.borrow_and_update().visible {
        if feedback.changed().await.is_err() {
            break;
        }
    }
}
