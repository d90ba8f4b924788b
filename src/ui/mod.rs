pub mod banner;
pub mod listing;
