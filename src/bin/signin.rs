//! Terminal client for the login flow.
//!
//! Drives the same controller as the web page against the configured
//! session API, so credentials can be checked without a browser.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for email and password
//! cargo run --bin signin -- login
//!
//! # Prompt for the password only
//! cargo run --bin signin -- login --email user@example.com
//!
//! # Check that the session API answers
//! cargo run --bin signin -- health
//! ```
//!
//! # Environment Variables
//!
//! - `SESSION_API_URL`: Session API base URL
//! - `SESSION_API_TIMEOUT_MS`: Per-request timeout

use login_portal::application::controllers::{LoginController, SubmitOutcome};
use login_portal::config::{self, Config};
use login_portal::domain::ports::Navigator;
use login_portal::infrastructure::session_api::{HttpSessionStore, SessionApiClient};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::process::ExitCode;
use std::sync::Arc;

/// Sign in against the session API from a terminal.
#[derive(Parser)]
#[command(name = "signin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        /// Email address (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Check session API reachability
    Health,
}

/// Prints the destination instead of moving anywhere.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_to(&self, path: &str) {
        println!("{} {}", "➡️  Continue at".green(), path.bright_cyan().bold());
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let client = SessionApiClient::new(&config.session_api_url, config.session_api_timeout())
        .context("Failed to build session API client")?;

    match cli.command {
        Commands::Login { email } => login(client, email).await,
        Commands::Health => health(client, &config).await,
    }
}

/// Runs one login attempt through [`LoginController`].
///
/// # Flow
///
/// 1. Prompt for email (or use `--email`)
/// 2. Prompt for the password with hidden input
/// 3. Submit and print either the destination or the error list
async fn login(client: SessionApiClient, email: Option<String>) -> Result<ExitCode> {
    println!("{}", "🔐 Sign in".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let store = Arc::new(HttpSessionStore::new(client));
    let mut page = LoginController::new(store, Arc::new(TerminalNavigator));
    page.mount().await;
    page.set_email(email);
    page.set_password(password);

    match page.submit().await {
        SubmitOutcome::Navigated { session, .. } => {
            println!("{}", "✅ Signed in".green().bold());
            if let Some(token) = session.token {
                println!("  Token: {}", token.bright_yellow());
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid | SubmitOutcome::Rejected | SubmitOutcome::Busy => {
            println!("{}", "❌ Sign in failed".red().bold());
            for message in page.errors() {
                println!("  {}", message.red());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn health(client: SessionApiClient, config: &Config) -> Result<ExitCode> {
    println!(
        "Session API: {}",
        client.base_url().as_str().bright_cyan()
    );

    match client.ping().await {
        Ok(status) => {
            println!("{} answered {}", "✅ Reachable,".green(), status);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "❌ Unreachable:".red().bold(), e);
            println!(
                "  Timeout: {}ms",
                config.session_api_timeout_ms.to_string().bright_black()
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
