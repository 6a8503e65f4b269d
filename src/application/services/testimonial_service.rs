//! Testimonial scroller content.

use std::sync::Arc;

use crate::application::assembly::assemble_testimonial;
use crate::application::images::ImageResolver;
use crate::application::views::TestimonialView;
use crate::domain::repositories::TestimonialRepository;

pub struct TestimonialService {
    repository: Arc<dyn TestimonialRepository>,
    images: Arc<ImageResolver>,
}

impl TestimonialService {
    pub fn new(repository: Arc<dyn TestimonialRepository>, images: Arc<ImageResolver>) -> Self {
        Self { repository, images }
    }

    /// Testimonials newest first, optionally only featured ones.
    ///
    /// Store failures yield an empty list.
    pub async fn list_testimonials(&self, featured_only: bool) -> Vec<TestimonialView> {
        let mut records = match self.repository.list(featured_only).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, featured_only, "Failed to load testimonials");
                return Vec::new();
            }
        };

        if featured_only {
            records.retain(|t| t.is_featured);
        }
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        records
            .into_iter()
            .enumerate()
            .map(|(position, t)| assemble_testimonial(t, position, &self.images))
            .collect()
    }
}
