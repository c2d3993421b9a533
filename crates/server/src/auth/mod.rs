pub mod cookies;
pub mod extractors;
