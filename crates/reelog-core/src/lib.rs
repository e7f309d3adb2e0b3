pub mod filter;
pub mod normalize;
pub mod render;
pub mod sort;

pub use filter::{filter_reviews, matches_query};
pub use normalize::{normalize, Library};
pub use render::{escape_html, rating_label, render_cards, render_page, render_summary};
pub use sort::{sort_reviews, SortMode};
