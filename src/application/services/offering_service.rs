//! Service (offering) page content.

use std::sync::Arc;

use crate::application::assembly::assemble_offering;
use crate::application::images::ImageResolver;
use crate::application::views::OfferingView;
use crate::domain::entities::visible_in_order;
use crate::domain::repositories::OfferingRepository;

/// Assembles the services the company offers.
///
/// There is no local copy of this content: store failures degrade to an
/// empty list or `None`.
pub struct OfferingService {
    repository: Arc<dyn OfferingRepository>,
    images: Arc<ImageResolver>,
}

impl OfferingService {
    pub fn new(repository: Arc<dyn OfferingRepository>, images: Arc<ImageResolver>) -> Self {
        Self { repository, images }
    }

    pub async fn list_offerings(&self) -> Vec<OfferingView> {
        match self.repository.list_active().await {
            Ok(records) => visible_in_order(records)
                .into_iter()
                .map(|o| assemble_offering(o, &self.images))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load services");
                Vec::new()
            }
        }
    }

    pub async fn get_offering(&self, slug: &str) -> Option<OfferingView> {
        if slug.trim().is_empty() {
            return None;
        }

        match self.repository.find_active_by_slug(slug).await {
            Ok(record) => record
                .filter(|o| o.is_active && o.slug == slug)
                .map(|o| assemble_offering(o, &self.images)),
            Err(e) => {
                tracing::warn!(error = %e, slug, "Failed to load service");
                None
            }
        }
    }

    pub async fn all_offering_slugs(&self) -> Vec<String> {
        self.list_offerings()
            .await
            .into_iter()
            .map(|o| o.slug)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Offering, RawBulletPoints};
    use crate::domain::repositories::MockOfferingRepository;
    use crate::error::AppError;
    use serde_json::json;

    fn record(id: i64, slug: &str, active: bool, order_index: i32) -> Offering {
        Offering {
            id,
            title: format!("Service {id}"),
            slug: slug.to_string(),
            description: "desc".to_string(),
            hero_image: None,
            hero_title: None,
            hero_description: None,
            hero_bulletpoints: None,
            is_active: active,
            order_index,
        }
    }

    fn service(repo: MockOfferingRepository) -> OfferingService {
        OfferingService::new(Arc::new(repo), Arc::new(ImageResolver::default()))
    }

    #[tokio::test]
    async fn test_list_offerings_filters_and_orders() {
        let mut repo = MockOfferingRepository::new();
        repo.expect_list_active().times(1).returning(|| {
            Ok(vec![
                record(1, "b", true, 2),
                record(2, "hidden", false, 1),
                record(3, "a", true, 1),
            ])
        });

        let ids: Vec<i64> = service(repo)
            .list_offerings()
            .await
            .iter()
            .map(|o| o.id)
            .collect();

        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_list_offerings_error_is_empty() {
        let mut repo = MockOfferingRepository::new();
        repo.expect_list_active()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        assert!(service(repo).list_offerings().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_offering_synthesizes_bullets() {
        let mut repo = MockOfferingRepository::new();
        repo.expect_find_active_by_slug()
            .withf(|slug| slug == "staffing")
            .returning(|_| Ok(Some(record(9, "staffing", true, 0))));

        let view = service(repo).get_offering("staffing").await.unwrap();

        assert_eq!(view.hero_bulletpoints.len(), 3);
        assert!(view.hero_bulletpoints.iter().all(|b| b.contains("Service 9")));
        assert_eq!(view.hero_image, "/landing/pexels-staffing-3184465.jpg");
    }

    #[tokio::test]
    async fn test_get_offering_decodes_string_bullets() {
        let mut repo = MockOfferingRepository::new();
        repo.expect_find_active_by_slug().returning(|_| {
            let mut o = record(1, "consulting", true, 0);
            o.hero_bulletpoints = Some(RawBulletPoints::Encoded(r#"["A","B"]"#.into()));
            Ok(Some(o))
        });

        let view = service(repo).get_offering("consulting").await.unwrap();
        assert_eq!(view.hero_bulletpoints, vec!["A".to_string(), "B".to_string()]);
    }

    #[tokio::test]
    async fn test_get_offering_error_is_none() {
        let mut repo = MockOfferingRepository::new();
        repo.expect_find_active_by_slug()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        assert!(service(repo).get_offering("staffing").await.is_none());
    }
}
