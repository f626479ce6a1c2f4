pub mod short_link;
pub mod shorten;

pub use short_link::{MessageResponse, ShortLinkRecord};
pub use shorten::ShortenRequest;
