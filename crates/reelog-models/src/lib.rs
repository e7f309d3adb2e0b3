pub mod meta;
pub mod review;

pub use meta::Meta;
pub use review::Review;
