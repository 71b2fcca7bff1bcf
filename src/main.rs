// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog command-line client
//!
//! Signs in to the catalog backend and submits new items, keeping the
//! session token in a local credential directory.

use catalog_client::{
    config::Config,
    form::{Field, SubmitOutcome, TextField},
    notice::{Destination, Notice},
    services::FileCredentialStore,
    services::PathImageLibrary,
    session::LoginOutcome,
    store::CategoryStore,
    AppState,
};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog backend client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "CATALOG_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the profile for the stored session
    Profile,

    /// Submit a new item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Category ID (must exist in CATALOG_CATEGORIES_FILE)
        #[arg(long)]
        category: i64,

        /// Image file to upload
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    let categories = match &config.categories_file {
        Some(path) => CategoryStore::from_json(&std::fs::read_to_string(path)?)?,
        None => CategoryStore::default(),
    };

    let credentials = FileCredentialStore::new(config.credentials_dir.clone());
    let state = AppState::new(&config, credentials, categories);
    let session = state.session_lifecycle();

    let ok = match cli.command {
        Commands::Login { email, password } => {
            let outcome = session.login(&email, &password).await;
            if let Some(notice) = outcome.notice() {
                show(&notice);
            }
            match state.session.profile() {
                Some(profile) => println!("Signed in as {} <{}>", profile.name, profile.email),
                None if outcome == LoginOutcome::ProfileUnavailable => {
                    eprintln!("Session token stored, but the profile could not be loaded; run `catalog profile` to retry")
                }
                None => {}
            }
            outcome.destination() == Some(Destination::Home)
        }
        Commands::Logout { yes } => {
            if yes || confirm("Are you sure you want to logout?")? {
                session.logout().await;
                println!("Logged out");
            }
            true
        }
        Commands::Profile => match session.fetch_profile().await {
            Some(profile) => {
                println!("{} <{}> (id {})", profile.name, profile.email, profile.id);
                true
            }
            None => {
                println!("Not signed in");
                false
            }
        },
        Commands::Add {
            name,
            description,
            category,
            image,
        } => {
            let mut form = state.submission_form(PathImageLibrary::new(Some(image)));
            form.change_field(TextField::Name, name);
            form.change_field(TextField::Description, description);
            if let Err(e) = form.select_category(category) {
                eprintln!("{}", e);
            }
            if let Some(notice) = form.pick_image().await.notice() {
                show(&notice);
            }

            let outcome = form.submit().await;
            if let Some(notice) = outcome.notice() {
                show(&notice);
            }
            for (field, message) in form.state().visible_errors().iter() {
                eprintln!("{}: {}", field_label(field), message);
            }
            outcome == SubmitOutcome::Created
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn show(notice: &Notice) {
    println!("{}", notice);
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Description => "Description",
        Field::Category => "Category",
        Field::Image => "Image",
    }
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_client=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
