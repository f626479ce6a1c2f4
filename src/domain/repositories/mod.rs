pub mod short_link_repository;

pub use short_link_repository::{InsertOutcome, ShortLinkRepository};

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
