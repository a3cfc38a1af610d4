//! authctl Entry Point
//!
//! Loads the session the way a page load would, then runs one sign-in,
//! sign-up or OAuth redirect through `AuthController` and prints the
//! resulting view and navigation.

mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::{
    AuthController, BootstrapSessionUseCase, ClientConfig, ControllerState, Credentials,
    HttpAuthApi, MemoryNavigator, PriorDestination, SessionStore,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, PriorArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authctl=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = if cfg!(debug_assertions) {
        ClientConfig::development()
    } else {
        ClientConfig::default()
    };
    config.base_url = cli.base_url;
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }
    let config = Arc::new(config);

    let api = Arc::new(HttpAuthApi::new(config.clone()).context("building HTTP client")?);
    let store = SessionStore::new();

    // Bootstrap failures leave the user anonymous
    match BootstrapSessionUseCase::new(api.clone(), store.clone())
        .execute()
        .await
    {
        Ok(session) => {
            tracing::info!(
                authenticated = session.is_some(),
                "Session bootstrap completed"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session bootstrap failed, continuing anonymous");
        }
    }

    let navigator = Arc::new(MemoryNavigator::new(config.home_path.clone()));

    match cli.command {
        Commands::Whoami => {
            println!("{}", serde_json::to_string_pretty(&store.current())?);
        }
        Commands::Oauth {
            provider_path,
            prior,
        } => {
            remember(&navigator, prior);
            let controller = AuthController::new(api, store, navigator.clone(), config);
            let url = controller
                .oauth_redirect(&provider_path)
                .context("building OAuth redirect")?;
            println!("{url}");
        }
        Commands::Signin(args) => {
            remember(&navigator, args.prior);
            let controller = AuthController::new(api, store, navigator.clone(), config);
            // Already signed in: construction bounced home
            if controller.state() == ControllerState::Anonymous {
                let credentials = Credentials::new(args.identifier, args.password);
                controller.sign_in(&credentials, args.remember).await;
            }
            print_view(&controller, &navigator)?;
        }
        Commands::Signup(args) => {
            remember(&navigator, args.prior);
            let controller = AuthController::new(api, store, navigator.clone(), config);
            if controller.state() == ControllerState::Anonymous {
                let credentials = Credentials::new(args.identifier, args.password);
                controller.sign_up(&credentials, args.remember).await;
            }
            print_view(&controller, &navigator)?;
        }
    }

    Ok(())
}

fn remember(navigator: &MemoryNavigator, prior: PriorArgs) {
    if let Some(name) = prior.return_to {
        let mut destination = PriorDestination::new(name);
        if let Some(href) = prior.return_href {
            destination = destination.with_href(href);
        }
        navigator.remember_destination(destination);
    }
}

fn print_view(
    controller: &AuthController<HttpAuthApi, MemoryNavigator>,
    navigator: &MemoryNavigator,
) -> anyhow::Result<()> {
    let view = controller.view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    println!("location: {}", navigator.location());

    if let Some(error) = view.error {
        anyhow::bail!(error);
    }
    Ok(())
}
