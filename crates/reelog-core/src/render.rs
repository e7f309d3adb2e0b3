use reelog_models::{Meta, Review};

/// Replace the five markup-significant characters with their entities so no
/// record field can be interpreted as markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One-line status summary for the rendered list.
pub fn render_summary(meta: &Meta, count: usize) -> String {
    format!("Updated: {} • {} review(s)", meta.updated, count)
}

/// The rating shown over 10, or an em dash when absent.
pub fn rating_label(review: &Review) -> String {
    match review.rating {
        Some(rating) if rating.fract() == 0.0 => format!("{}", rating as i64),
        Some(rating) => format!("{}", rating),
        None => "—".to_string(),
    }
}

/// Render one card block per review, or the placeholder for an empty list.
pub fn render_cards(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return r#"<p class="muted">No reviews found.</p>"#.to_string();
    }
    reviews
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(review: &Review) -> String {
    let tags = review
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect::<String>();
    let watched = review
        .watched_on
        .as_deref()
        .map(|date| format!("\n  <div class=\"muted\">Watched: {}</div>", escape_html(date)))
        .unwrap_or_default();

    format!(
        r#"<article class="card">
  <div class="card-head">
    <h2>{title} <span class="muted">({year})</span></h2>
    <div class="rating">{rating}/10</div>
  </div>{watched}
  <p>{summary}</p>
  <div class="tags">{tags}</div>
</article>"#,
        title = escape_html(&review.title),
        year = escape_html(review.year.as_deref().unwrap_or("")),
        rating = escape_html(&rating_label(review)),
        watched = watched,
        summary = escape_html(review.summary.as_deref().unwrap_or("")),
        tags = tags,
    )
}

/// Wrap the card list in a standalone page so the output is viewable as-is.
pub fn render_page(reviews: &[Review], meta: &Meta, title: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.card {{ border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 1rem 0; }}
.card-head {{ display: flex; justify-content: space-between; align-items: baseline; }}
.muted {{ color: #777; }}
.tag {{ background: #eee; border-radius: 4px; padding: 0 0.4rem; margin-right: 0.3rem; font-size: 0.85rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="muted">{summary}</p>
{cards}
</body>
</html>
"#,
        title = escape_html(title),
        summary = escape_html(&render_summary(meta, reviews.len())),
        cards = render_cards(reviews),
    )
}
