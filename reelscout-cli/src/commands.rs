//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use reelscout_core::app::AppView;
use reelscout_core::driver::{run_details, run_search, shared};
use reelscout_core::grid::PosterView;
use reelscout_core::overlay::{OverlayContent, OverlayView};
use reelscout_core::{ReelScout, ReelScoutConfig, RuntimeMode, SortOrder};
use reelscout_search::MovieSearchService;
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Runtime mode: prod or dev (dev serves the built-in demo catalog)
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Search titles and print one page of results
    Search {
        /// Title to search for
        query: String,
        /// Result page (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Sort order: default, az, za, newest, oldest
        #[arg(short, long, default_value_t = SortOrder::Default)]
        sort: SortOrder,
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Print the full record for one title id
    Details {
        /// IMDb title id, e.g. tt0372784
        id: String,
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the first configuration, network or server failure encountered
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port, mode } => start_server(host, port, mode).await,
        Commands::Search {
            query,
            page,
            sort,
            mode,
        } => search(query, page, sort, mode).await,
        Commands::Details { id, mode } => details(id, mode).await,
    }
}

fn load_config(mode: Option<RuntimeMode>) -> ReelScoutConfig {
    let mut config = ReelScoutConfig::from_env();
    if let Some(mode) = mode {
        config.runtime_mode = mode;
    }
    config
}

/// Start the web server
///
/// # Errors
/// - `ReelScoutError::Configuration` - Invalid OMDb base URL
/// - `ReelScoutError::Io` - Could not bind the address
pub async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    mode: Option<RuntimeMode>,
) -> anyhow::Result<()> {
    let mut config = load_config(mode);
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!(
        "Starting ReelScout on http://{} ({} mode)",
        config.server.bind_address(),
        config.runtime_mode
    );
    reelscout_web::run_server(config)
        .await
        .context("web server stopped")
}

/// Run one search and print the resulting view
///
/// # Errors
/// - `ReelScoutError::Configuration` - Invalid OMDb base URL
pub async fn search(
    query: String,
    page: u32,
    sort: SortOrder,
    mode: Option<RuntimeMode>,
) -> anyhow::Result<()> {
    let config = load_config(mode);
    let service = MovieSearchService::from_runtime_mode(config.runtime_mode, &config.omdb)?;

    let mut app = ReelScout::new();
    app.set_sort(sort);
    let Some(ticket) = app.request_search(&query, page) else {
        anyhow::bail!("query must be non-empty and page must be at least 1");
    };

    let state = shared(app);
    let commit = run_search(&state, &service, ticket).await;
    info!(?commit, "Search finished");

    print_results(&state.read().await.view());
    Ok(())
}

/// Look up one title and print its details
///
/// # Errors
/// - `ReelScoutError::Configuration` - Invalid OMDb base URL
pub async fn details(id: String, mode: Option<RuntimeMode>) -> anyhow::Result<()> {
    let config = load_config(mode);
    let service = MovieSearchService::from_runtime_mode(config.runtime_mode, &config.omdb)?;

    let state = shared(ReelScout::new());
    let Some(ticket) = state.write().await.open_details(&id) else {
        anyhow::bail!("title id must be non-empty");
    };
    run_details(&state, &service, ticket).await;

    print_overlay(&state.read().await.overlay());
    Ok(())
}

fn print_results(view: &AppView) {
    println!("{}", view.status);
    if view.grid.is_empty() {
        return;
    }

    println!("{:-<72}", "");
    for card in &view.grid.cards {
        let poster = match &card.poster {
            PosterView::Image { .. } => "",
            PosterView::Placeholder { .. } => "  (no poster)",
        };
        println!(
            "{:<12} {:<40} {:<10} {:<8}{poster}",
            card.id, card.title, card.year, card.badge
        );
    }
    println!("{:-<72}", "");

    let pager = &view.pager;
    println!("{} of {}", pager.label, pager.max_page);
    if pager.has_next {
        println!("Use --page {} for more results.", pager.page + 1);
    }
}

fn print_overlay(overlay: &OverlayView) {
    match &overlay.content {
        Some(OverlayContent::Record(detail)) => {
            println!("{}", detail.title);
            println!("{}", detail.subtitle);
            println!("{}", detail.chips.join("  |  "));
            println!();
            println!("{}", detail.plot);
            println!();
            for (label, value) in &detail.facts {
                println!("{label:>10}: {value}");
            }
        }
        Some(OverlayContent::Loading { text } | OverlayContent::Message { text }) => {
            println!("{text}");
        }
        None => {}
    }
}
