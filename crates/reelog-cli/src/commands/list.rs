use crate::commands::{load, view};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use reelog_core::{filter_reviews, render_page, sort_reviews, SortMode};
use serde_json::json;

pub async fn run_list(
    url: Option<String>,
    query: Option<String>,
    sort: Option<String>,
    html: bool,
    output: &Output,
) -> Result<()> {
    let (library, config) = match load::load_library(url, output).await {
        Ok(loaded) => loaded,
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    };

    let query = query.unwrap_or_default();
    let query = query.trim();
    let mode = SortMode::from_tag(sort.as_deref().unwrap_or(&config.default_sort));

    let filtered = filter_reviews(&library.reviews, query);
    let sorted = sort_reviews(&filtered, mode);

    if html {
        // The page is the artifact; print it raw regardless of output format.
        print!("{}", render_page(&sorted, &library.meta, &config.page_title));
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => view::print_reviews(&sorted, &library.meta, output),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "updated": library.meta.updated,
                "count": sorted.len(),
                "sort": mode.as_str(),
                "query": query,
                "reviews": sorted,
            }));
        }
    }

    Ok(())
}
