//! Repository trait definitions for the remote content store.
//!
//! These traits are the content gateway: the only way the application reads
//! or writes hosted data. Concrete implementations live in
//! `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`IndustryRepository`] - Industry pages
//! - [`OfferingRepository`] - Services offered
//! - [`TestimonialRepository`] - Client testimonials
//! - [`JobRepository`] - Open positions
//! - [`ContactRepository`] - Contact form sink

pub mod contact_repository;
pub mod industry_repository;
pub mod job_repository;
pub mod offering_repository;
pub mod testimonial_repository;

pub use contact_repository::ContactRepository;
pub use industry_repository::IndustryRepository;
pub use job_repository::JobRepository;
pub use offering_repository::OfferingRepository;
pub use testimonial_repository::TestimonialRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use industry_repository::MockIndustryRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use offering_repository::MockOfferingRepository;
#[cfg(test)]
pub use testimonial_repository::MockTestimonialRepository;
