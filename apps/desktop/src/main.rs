use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{load_settings, Settings},
    FormState, HttpRelayTransport, Navigator, Route, Session,
    SubmissionController, SuccessView,
};
use serde::Serialize;
use shared::{domain::ContactField, error::SUBMISSION_ALERT};
use storage::Storage;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Send a contact request to the form relay")]
struct Cli {
    /// Settings file (defaults to ./contact_form.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    relay_url: Option<String>,
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        whatsapp: String,
    },
    Status {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct StatusReport {
    submitted: bool,
    submitted_at: Option<String>,
    landing_route: &'static str,
    relay_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(relay_url) = cli.relay_url {
        settings.relay_url = relay_url;
    }
    if let Some(database_url) = cli.database_url {
        settings.database_url = database_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let database_url = settings.prepared_database_url();
    let storage = Storage::new(&database_url)
        .await
        .with_context(|| format!("failed to open profile database '{database_url}'"))?;
    let session = Session::load(&storage).await?;

    match cli.command {
        Command::Submit {
            name,
            email,
            whatsapp,
        } => submit(&settings, storage, session, [name, email, whatsapp]).await,
        Command::Status { json } => status(&settings, &storage, session, json).await,
    }
}

async fn submit(
    settings: &Settings,
    storage: Storage,
    mut session: Session,
    values: [String; 3],
) -> Result<()> {
    let mut navigator = Navigator::start(&session, Route::Form.path());
    if navigator.current().route == Route::Success {
        info!("submit: profile already submitted, showing confirmation");
        println!("A message was already sent from this profile.");
        print_success(&SuccessView::from_state(&navigator.current().state));
        return Ok(());
    }

    let mut form = FormState::new();
    for (field, value) in ContactField::ALL.into_iter().zip(values) {
        form.set_field(field, value);
    }

    let Some(snapshot) = form.begin_submit() else {
        warn!("submit: form failed validation, nothing sent");
        for (field, message) in form.errors().iter().filter(|(_, m)| !m.is_empty()) {
            eprintln!("{}: {message}", field.placeholder());
        }
        bail!("form has validation errors; nothing was sent");
    };

    let endpoint = settings.relay_endpoint()?;
    let transport = Arc::new(HttpRelayTransport::new(endpoint.as_str()));
    info!(relay = transport.endpoint(), "submit: sending contact form");
    let controller = SubmissionController::new(transport, Arc::new(storage));
    let outcome = controller.submit(&snapshot).await;
    if outcome.is_ok() {
        session.mark_submitted();
    }

    match form.finish_submit(&outcome) {
        Some((route, state)) => {
            let outcome = navigator.navigate(&session, route, state);
            info!(?outcome, route = navigator.current().route.path(), "submit: delivered");
            print_success(&SuccessView::from_state(&navigator.current().state));
            Ok(())
        }
        None => bail!("{}", form.alert().unwrap_or(SUBMISSION_ALERT)),
    }
}

async fn status(
    settings: &Settings,
    storage: &Storage,
    session: Session,
    json: bool,
) -> Result<()> {
    let record = storage.submitted_flag().await?;
    let navigator = Navigator::start(&session, Route::Form.path());
    info!(submitted = session.is_submitted(), "status: read profile flag");
    let report = StatusReport {
        submitted: session.is_submitted(),
        submitted_at: record.map(|r| r.updated_at.to_rfc3339()),
        landing_route: navigator.current().route.path(),
        relay_url: settings.relay_url.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("submitted={}", report.submitted);
        if let Some(at) = &report.submitted_at {
            println!("submitted_at={at}");
        }
        println!("landing_route={}", report.landing_route);
        println!("relay_url={}", report.relay_url);
    }
    Ok(())
}

fn print_success(view: &SuccessView) {
    println!("{}", view.heading());
    println!("{}", client_core::views::SUCCESS_MESSAGE);
    println!("{}", client_core::views::SUCCESS_NOTE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::NavigationState;

    #[test]
    fn parses_submit_command_with_global_overrides() {
        let cli = Cli::try_parse_from([
            "contact-form",
            "--relay-url",
            "http://127.0.0.1:9000/f/dev",
            "submit",
            "--name",
            "Alice",
            "--email",
            "a@b.com",
            "--whatsapp",
            "12345678901",
        ])
        .expect("parse");
        assert_eq!(cli.relay_url.as_deref(), Some("http://127.0.0.1:9000/f/dev"));
        assert!(matches!(cli.command, Command::Submit { ref name, .. } if name == "Alice"));
    }

    #[test]
    fn status_defaults_to_plain_output() {
        let cli = Cli::try_parse_from(["contact-form", "status"]).expect("parse");
        assert!(matches!(cli.command, Command::Status { json: false }));
    }

    #[test]
    fn guard_redirect_drops_carried_name() {
        let view = SuccessView::from_state(&NavigationState::default());
        assert_eq!(view.user_name, "User");
    }
}
