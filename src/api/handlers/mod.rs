pub mod links;
pub mod redirect;
pub mod shorten;

pub use links::{delete_link_handler, fetch_link_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
