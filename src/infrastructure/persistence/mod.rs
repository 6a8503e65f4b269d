//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of the
//! hosted Postgres database. Queries are built at runtime with
//! `sqlx::query_as` and mapped through `FromRow` row structs, so list-valued
//! JSONB columns can be decoded tolerantly before they reach the domain.
//!
//! # Repositories
//!
//! - [`PgIndustryRepository`] - Industry pages (also seeds from the catalog)
//! - [`PgOfferingRepository`] - Services offered
//! - [`PgTestimonialRepository`] - Testimonials
//! - [`PgJobRepository`] - Open positions
//! - [`PgContactRepository`] - Contact form submissions

pub mod pg_contact_repository;
pub mod pg_industry_repository;
pub mod pg_job_repository;
pub mod pg_offering_repository;
pub mod pg_testimonial_repository;

pub use pg_contact_repository::PgContactRepository;
pub use pg_industry_repository::PgIndustryRepository;
pub use pg_job_repository::PgJobRepository;
pub use pg_offering_repository::PgOfferingRepository;
pub use pg_testimonial_repository::PgTestimonialRepository;

use serde_json::Value;
use sqlx::types::Json;

use crate::domain::entities::RawBulletPoints;

/// Converts a nullable JSONB list column into its raw domain shape.
pub(crate) fn raw_list(column: Option<Json<Value>>) -> Option<RawBulletPoints> {
    column.and_then(|Json(value)| RawBulletPoints::from_json(value))
}
