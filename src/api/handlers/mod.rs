//! HTTP request handlers.

mod health;
mod redirect;
mod shorten;
mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{delete_url_handler, url_list_handler};
