//! HTTP endpoint handlers.
//!
//! One module per logical endpoint group.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{delete_url_handler, list_urls_handler, update_url_handler};
