//! Oktaform - look up Okta OAuth applications from the command line

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

use config::Settings;
use oktaform_client::OktaClient;
use oktaform_core::OktaError;
use oktaform_datasource::{AppOauthConfig, AppOauthDataSource, APP_OAUTH_SCHEMA};

#[derive(Debug, Parser)]
#[command(name = "oktaform", version, about = "Look up Okta OAuth applications")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve one OAuth application and print its attributes
    AppOauth(AppOauthArgs),
    /// Print the attribute schema of the app-oauth lookup
    Schema,
}

#[derive(Debug, Args)]
struct AppOauthArgs {
    /// Application id
    #[arg(long)]
    id: Option<String>,
    /// Exact application label
    #[arg(long)]
    label: Option<String>,
    /// Application label prefix
    #[arg(long)]
    label_prefix: Option<String>,
    /// Search only ACTIVE applications
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    active_only: bool,
    /// Do not list assigned users
    #[arg(long)]
    skip_users: bool,
    /// Do not list assigned groups
    #[arg(long)]
    skip_groups: bool,
    /// Print sensitive attributes in clear text
    #[arg(long)]
    show_secrets: bool,
}

impl AppOauthArgs {
    fn to_config(&self) -> AppOauthConfig {
        AppOauthConfig {
            id: self.id.clone(),
            label: self.label.clone(),
            label_prefix: self.label_prefix.clone(),
            active_only: self.active_only,
            skip_users: self.skip_users,
            skip_groups: self.skip_groups,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::AppOauth(args) => app_oauth(args).await,
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(APP_OAUTH_SCHEMA)?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,oktaform=debug"));

    // stdout carries the JSON result
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

async fn app_oauth(args: AppOauthArgs) -> Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;
    let okta_config = settings.okta_config()?;

    let client = OktaClient::new(okta_config).context("Failed to create Okta client")?;
    info!("Using Okta org {}", client.org_url());
    let source = AppOauthDataSource::from_client(Arc::new(client));

    let config = args.to_config();
    let deadline = settings.read.timeout_secs.map(Duration::from_secs);

    let output = tokio::select! {
        result = with_deadline(source.read_config(&config), deadline) => result?,
        _ = tokio::signal::ctrl_c() => {
            return Err(OktaError::upstream("request canceled").into());
        }
    };

    debug!("Read complete for application {}", output.id);
    let state = output.to_state(args.show_secrets)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Bound a read by an optional overall deadline
async fn with_deadline<T, F>(read: F, deadline: Option<Duration>) -> oktaform_core::Result<T>
where
    F: Future<Output = oktaform_core::Result<T>>,
{
    match deadline {
        Some(limit) => tokio::time::timeout(limit, read)
            .await
            .unwrap_or_else(|_| Err(OktaError::upstream("deadline exceeded"))),
        None => read.await,
    }
}
