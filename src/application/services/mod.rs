//! Application services orchestrating domain operations.

mod shortener_service;

pub use shortener_service::{MAX_LIST_LIMIT, ShortenerService};
