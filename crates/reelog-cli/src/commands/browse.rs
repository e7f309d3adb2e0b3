use crate::commands::{load, view};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use dialoguer::{Input, Select};
use reelog_core::{filter_reviews, sort_reviews, Library, SortMode};

const SORT_TAGS: [&str; 3] = ["newest", "rating", "title"];

pub async fn run_browse(url: Option<String>, output: &Output) -> Result<()> {
    if output.format() != OutputFormat::Human {
        output.error("browse is interactive and only supports --output human");
        std::process::exit(2);
    }

    let (library, config) = match load::load_library(url, output).await {
        Ok(loaded) => loaded,
        Err(e) => {
            // Terminal error state: show the message and stop, no retry.
            output.error(e.to_string());
            std::process::exit(1);
        }
    };

    let mut query = String::new();
    let mut mode = SortMode::from_tag(&config.default_sort);

    // Initial render of the unfiltered, default-sorted view.
    refresh(&library, &query, mode, output);

    loop {
        let action = Select::new()
            .with_prompt("Action")
            .items(&["Change query", "Change sort", "Show list", "Quit"])
            .default(0)
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;

        match action {
            0 => {
                let typed = Input::<String>::new()
                    .with_prompt("Query")
                    .with_initial_text(query.clone())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;
                query = typed.trim().to_string();
            }
            1 => {
                let current = SORT_TAGS
                    .iter()
                    .position(|tag| *tag == mode.as_str())
                    .unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("Sort by")
                    .items(&SORT_TAGS)
                    .default(current)
                    .interact()
                    .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;
                mode = SortMode::from_tag(SORT_TAGS[picked]);
            }
            2 => {}
            _ => break,
        }

        refresh(&library, &query, mode, output);
    }

    Ok(())
}

// Full pipeline pass over the in-memory record set with the current
// query and mode.
fn refresh(library: &Library, query: &str, mode: SortMode, output: &Output) {
    let filtered = filter_reviews(&library.reviews, query);
    let sorted = sort_reviews(&filtered, mode);
    view::print_reviews(&sorted, &library.meta, output);
}
