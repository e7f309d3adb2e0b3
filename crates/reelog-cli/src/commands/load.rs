use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reelog_client::ReviewsClient;
use reelog_config::{Config, PathManager};
use reelog_core::{normalize, Library};
use std::io::IsTerminal;
use std::time::Duration;
use tracing::{debug, info};

/// Resolve config, fetch the document once, and normalize it into the
/// in-memory library. Used by both the one-shot and interactive commands.
pub async fn load_library(url: Option<String>, output: &Output) -> Result<(Library, Config)> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file()).map_err(|e| eyre!("{}", e))?;

    let endpoint = url.unwrap_or_else(|| config.endpoint.clone());
    debug!(endpoint = %endpoint, "resolved review endpoint");
    let client = ReviewsClient::new(endpoint);

    let spinner = if output.format() == OutputFormat::Human
        && !output.is_quiet()
        && std::io::stdout().is_terminal()
    {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message("Loading reviews...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let result = client.fetch_document().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let document = result?;
    let library = normalize(&document);
    info!(reviews = library.reviews.len(), "review library loaded");
    Ok((library, config))
}
