use crate::output::Output;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use reelog_core::{rating_label, render_summary};
use reelog_models::{Meta, Review};

/// Shared terminal view: summary line plus one table row per review.
pub fn print_reviews(reviews: &[Review], meta: &Meta, output: &Output) {
    output.info(render_summary(meta, reviews.len()).bold().to_string());

    if reviews.is_empty() {
        output.println("No reviews found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Title", "Year", "Rating", "Watched", "Tags", "Summary"]);

    for review in reviews {
        table.add_row(vec![
            Cell::new(&review.title),
            Cell::new(review.year.as_deref().unwrap_or("")),
            Cell::new(format!("{}/10", rating_label(review))),
            Cell::new(review.watched_on.as_deref().unwrap_or("")),
            Cell::new(review.tags.join(", ")),
            Cell::new(review.summary.as_deref().unwrap_or("")),
        ]);
    }

    output.println(table.to_string());
}
