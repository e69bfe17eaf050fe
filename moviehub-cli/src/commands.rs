//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use moviehub_core::config::MovieHubConfig;
use moviehub_core::{MovieHubError, RuntimeMode};
use moviehub_search::MovieHubServices;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Use demo data instead of TMDB and Appwrite
        #[arg(long)]
        demo: bool,
    },
    /// Run one catalog search and print the results
    Search {
        /// Search text; empty lists popular movies
        #[arg(default_value = "")]
        query: String,
        /// Use demo data instead of TMDB
        #[arg(long)]
        demo: bool,
    },
    /// Print the trending list
    Trending {
        /// Use the in-memory store instead of Appwrite
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the failure of the command that ran
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MovieHubConfig::from_env();

    match command {
        Commands::Serve { host, port, demo } => serve(config, host, port, demo).await,
        Commands::Search { query, demo } => search(&config, &query, demo).await,
        Commands::Trending { demo } => trending(&config, demo).await,
    }
}

async fn serve(mut config: MovieHubConfig, host: String, port: u16, demo: bool) -> anyhow::Result<()> {
    config.web.host = host;
    config.web.port = port;

    moviehub_web::run_server(config, RuntimeMode::from_demo_flag(demo))
        .await
        .context("Web server failed")
}

async fn search(config: &MovieHubConfig, query: &str, demo: bool) -> anyhow::Result<()> {
    let services = MovieHubServices::from_runtime_mode(config, RuntimeMode::from_demo_flag(demo));

    let movies = match services.catalog.fetch_movies(query).await {
        Ok(movies) => movies,
        Err(e) => {
            tracing::debug!("Search for {:?} failed: {}", query, e);
            let message = MovieHubError::from(e).user_message();
            anyhow::bail!(message);
        }
    };

    if movies.is_empty() {
        println!("No movies found");
        return Ok(());
    }

    for (index, movie) in movies.iter().enumerate() {
        println!(
            "{:>2}. {} ({}) - {} - {}",
            index + 1,
            movie.title,
            movie.release_year().unwrap_or("N/A"),
            movie.format_rating(),
            movie.original_language.as_deref().unwrap_or("N/A"),
        );
    }

    Ok(())
}

async fn trending(config: &MovieHubConfig, demo: bool) -> anyhow::Result<()> {
    let services = MovieHubServices::from_runtime_mode(config, RuntimeMode::from_demo_flag(demo));

    let entries = services.trending.trending().await.map_err(|e| {
        tracing::debug!("Trending lookup failed: {}", e);
        anyhow::anyhow!(MovieHubError::from(e).user_message())
    })?;

    if entries.is_empty() {
        println!("Nothing is trending yet");
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        println!("{:>2}. {}  {}", index + 1, entry.title, entry.poster_url);
    }

    Ok(())
}
