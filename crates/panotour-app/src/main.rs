//! Panotour CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use panotour_api::{issue_token, ApiConfig, AppState};
use panotour_app::cli::{Cli, Commands};
use panotour_models::UserId;

#[tokio::main]
async fn main() {
    // Load .env if it exists (for PANOTOUR_AUTH_SECRET etc.)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));

    fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Serve { host, port } => run_serve(host, port).await,
        Commands::Token { user_id } => run_token(&user_id),
        Commands::Demo => run_demo().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ApiConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let state = AppState::new(config.clone());
    panotour_api::serve(config, state).await?;
    Ok(())
}

fn run_token(user_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let token = issue_token(&UserId::from(user_id), &config.auth_secret);
    println!("{}", token);
    Ok(())
}

async fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let (_, store, tour) = panotour_app::demo::demo_store().await?;

    for tour in store.tours().await {
        println!(
            "{} [{}] - {} images, {} views",
            tour.title,
            tour.status,
            tour.images.len(),
            tour.view_count
        );
    }

    let mut scene =
        panotour_app::demo::demo_scene(&tour).ok_or("demo tour has no images")?;
    println!("viewing: {}", scene.panorama_url());
    while let Some(next) = scene
        .hotspots()
        .iter()
        .find(|h| h.is_navigation())
        .map(|h| h.id.clone())
    {
        match scene.click(&tour, &next) {
            Some(event) => println!("{:?} -> {}", event, scene.panorama_url()),
            None => break,
        }
        if scene.panorama_url().ends_with("living-room.jpg") {
            break;
        }
    }
    Ok(())
}
