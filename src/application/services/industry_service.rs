//! Industry page content.

use std::sync::Arc;

use crate::application::assembly::assemble_industry;
use crate::application::images::ImageResolver;
use crate::application::views::{ContentSource, IndustryView};
use crate::domain::catalog;
use crate::domain::entities::{Industry, visible_in_order};
use crate::domain::repositories::IndustryRepository;

/// Assembles industry pages from the remote store, with the local catalog as
/// the fallback when the store fails.
///
/// # Fallback Policy
///
/// - Store error: serve the local catalog (when `catalog_fallback` is set),
///   otherwise an empty list / `None`
/// - Store success with no rows: empty list (the page shows its empty state)
/// - Store success with no matching slug: `None` (not found)
pub struct IndustryService {
    repository: Arc<dyn IndustryRepository>,
    images: Arc<ImageResolver>,
    catalog_fallback: bool,
}

impl IndustryService {
    pub fn new(
        repository: Arc<dyn IndustryRepository>,
        images: Arc<ImageResolver>,
        catalog_fallback: bool,
    ) -> Self {
        Self {
            repository,
            images,
            catalog_fallback,
        }
    }

    /// All visible industries in display order.
    pub async fn list_industries(&self) -> Vec<IndustryView> {
        match self.repository.list_active().await {
            Ok(records) => self.assemble_all(records, ContentSource::Remote),
            Err(e) => {
                tracing::warn!(error = %e, fallback = self.catalog_fallback, "Failed to load industries");
                if self.catalog_fallback {
                    self.assemble_all(catalog::industries().to_vec(), ContentSource::Catalog)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// A single visible industry by slug.
    pub async fn get_industry(&self, slug: &str) -> Option<IndustryView> {
        if slug.trim().is_empty() {
            return None;
        }

        match self.repository.find_active_by_slug(slug).await {
            Ok(record) => record
                .filter(|i| i.is_active && i.slug == slug)
                .map(|i| assemble_industry(i, ContentSource::Remote, &self.images)),
            Err(e) => {
                tracing::warn!(error = %e, slug, fallback = self.catalog_fallback, "Failed to load industry");
                if self.catalog_fallback {
                    self.local_industry(slug)
                } else {
                    None
                }
            }
        }
    }

    /// Slugs of all visible industries, for link generation.
    pub async fn all_industry_slugs(&self) -> Vec<String> {
        self.list_industries()
            .await
            .into_iter()
            .map(|i| i.slug)
            .collect()
    }

    /// Looks up an industry in the local catalog only.
    pub fn local_industry(&self, slug: &str) -> Option<IndustryView> {
        catalog::industry_by_slug(slug)
            .filter(|i| i.is_active)
            .cloned()
            .map(|i| assemble_industry(i, ContentSource::Catalog, &self.images))
    }

    fn assemble_all(&self, records: Vec<Industry>, source: ContentSource) -> Vec<IndustryView> {
        visible_in_order(records)
            .into_iter()
            .map(|i| assemble_industry(i, source, &self.images))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockIndustryRepository;
    use crate::error::AppError;
    use serde_json::json;

    fn record(id: i64, slug: &str, active: bool, order_index: i32) -> Industry {
        Industry {
            id,
            name: format!("Industry {id}"),
            slug: slug.to_string(),
            description: String::new(),
            image: None,
            bullet_points: None,
            is_active: active,
            order_index,
            hero_title: None,
            hero_description: None,
            hero_industry_label: None,
            approach_items: Vec::new(),
        }
    }

    fn service(repo: MockIndustryRepository, catalog_fallback: bool) -> IndustryService {
        IndustryService::new(
            Arc::new(repo),
            Arc::new(ImageResolver::default()),
            catalog_fallback,
        )
    }

    fn gateway_error() -> AppError {
        AppError::internal("Database error", json!({}))
    }

    #[tokio::test]
    async fn test_list_excludes_inactive_and_orders_stably() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_list_active().times(1).returning(|| {
            Ok(vec![
                record(1, "late", true, 5),
                record(2, "inactive", false, 0),
                record(3, "first-tie", true, 1),
                record(4, "second-tie", true, 1),
            ])
        });

        let slugs: Vec<String> = service(repo, true)
            .list_industries()
            .await
            .into_iter()
            .map(|i| i.slug)
            .collect();

        assert_eq!(slugs, vec!["first-tie", "second-tie", "late"]);
    }

    #[tokio::test]
    async fn test_list_resolves_images() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_list_active()
            .returning(|| Ok(vec![record(1, "healthcare", true, 0)]));

        let list = service(repo, true).list_industries().await;

        assert_eq!(list[0].image, "/landing/pexels-tiger-lily-7109063.jpg");
        assert_eq!(list[0].source, ContentSource::Remote);
    }

    #[tokio::test]
    async fn test_empty_gateway_gives_empty_slugs() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_list_active().times(1).returning(|| Ok(vec![]));

        assert!(service(repo, true).all_industry_slugs().await.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_error_falls_back_to_catalog() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_list_active()
            .times(1)
            .returning(|| Err(gateway_error()));

        let list = service(repo, true).list_industries().await;

        assert_eq!(list.len(), catalog::industries().len());
        assert!(list.iter().all(|i| i.source == ContentSource::Catalog));
    }

    #[tokio::test]
    async fn test_gateway_error_without_fallback_is_empty() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_list_active()
            .times(1)
            .returning(|| Err(gateway_error()));

        assert!(service(repo, false).list_industries().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_industry_found() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_find_active_by_slug()
            .withf(|slug| slug == "finance")
            .times(1)
            .returning(|_| Ok(Some(record(3, "finance", true, 0))));

        let view = service(repo, true).get_industry("finance").await.unwrap();
        assert_eq!(view.id, 3);
        assert_eq!(view.image, "/landing/pexels-finance-6801648.jpg");
    }

    #[tokio::test]
    async fn test_get_industry_not_found_does_not_use_catalog() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_find_active_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        assert!(service(repo, true).get_industry("healthcare").await.is_none());
    }

    #[tokio::test]
    async fn test_get_industry_ignores_inactive_row() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_find_active_by_slug()
            .returning(|_| Ok(Some(record(1, "finance", false, 0))));

        assert!(service(repo, true).get_industry("finance").await.is_none());
    }

    #[tokio::test]
    async fn test_get_industry_error_uses_catalog() {
        let mut repo = MockIndustryRepository::new();
        repo.expect_find_active_by_slug()
            .times(1)
            .returning(|_| Err(gateway_error()));

        let view = service(repo, true).get_industry("healthcare").await.unwrap();
        assert_eq!(view.source, ContentSource::Catalog);
        assert_eq!(view.name, "Healthcare");
    }

    #[tokio::test]
    async fn test_get_industry_blank_slug_skips_gateway() {
        let repo = MockIndustryRepository::new();
        assert!(service(repo, true).get_industry(" ").await.is_none());
    }

    #[test]
    fn test_local_industry_never_touches_gateway() {
        let repo = MockIndustryRepository::new();
        let svc = service(repo, false);

        let view = svc.local_industry("technology").unwrap();
        assert_eq!(view.source, ContentSource::Catalog);
        assert_eq!(view.image, "/landing/pexels-technology-3861969.jpg");
        assert!(svc.local_industry("unknown").is_none());
    }
}
