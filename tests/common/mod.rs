#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shortlink::prelude::*;

pub const BASE_URL: &str = "http://sho.rt";

/// In-memory store with the same contract as the Postgres repository:
/// code uniqueness spans live and deleted rows, lookups skip deleted rows,
/// and soft deletion is a single conditional transition.
#[derive(Default)]
pub struct InMemoryShortLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let link = ShortLink::new(
            new_link.code.clone(),
            new_link.original_url,
            new_link.short_url,
            Utc::now(),
            None,
        );
        links.insert(new_link.code, link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_live_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.links.lock().unwrap();

        Ok(links.get(code).filter(|l| !l.is_deleted()).cloned())
    }

    async fn soft_delete_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.get_mut(code) {
            Some(link) if !link.is_deleted() => {
                link.deleted_at = Some(Utc::now());
                Ok(Some(link.clone()))
            }
            _ => Ok(None),
        }
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repo = Arc::new(InMemoryShortLinkRepository::default());
    let link_service = Arc::new(ShortLinkService::new(repo.clone(), BASE_URL));

    (AppState { link_service }, repo)
}

/// Seeds a link that has already been soft-deleted.
pub async fn seed_deleted_link(repo: &InMemoryShortLinkRepository, code: &str, url: &str) {
    let outcome = repo
        .insert(NewShortLink {
            code: code.to_string(),
            original_url: url.to_string(),
            short_url: format!("{BASE_URL}/{code}"),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, InsertOutcome::Created(_)));

    repo.soft_delete_by_code(code).await.unwrap().unwrap();
}
