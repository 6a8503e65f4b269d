//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::images::ImageResolver;
use crate::application::services::{
    ContactService, DashboardService, IndustryService, JobService, OfferingService,
    SessionService, TestimonialService,
};
use crate::domain::repositories::{
    ContactRepository, IndustryRepository, JobRepository, OfferingRepository,
    TestimonialRepository,
};

/// The content store seen through its repository traits.
///
/// Production wires the Postgres implementations; tests substitute fakes.
#[derive(Clone)]
pub struct Repositories {
    pub industries: Arc<dyn IndustryRepository>,
    pub offerings: Arc<dyn OfferingRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub contacts: Arc<dyn ContactRepository>,
}

/// Application state shared across handlers.
///
/// Cheap to clone: every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub industry_service: Arc<IndustryService>,
    pub offering_service: Arc<OfferingService>,
    pub testimonial_service: Arc<TestimonialService>,
    pub job_service: Arc<JobService>,
    pub contact_service: Arc<ContactService>,
    pub session_service: Arc<SessionService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Builds every service on top of the given repositories.
    pub fn new(
        repositories: Repositories,
        images: Arc<ImageResolver>,
        session_service: SessionService,
        catalog_fallback: bool,
    ) -> Self {
        let Repositories {
            industries,
            offerings,
            testimonials,
            jobs,
            contacts,
        } = repositories;

        let dashboard_service = DashboardService::new(
            industries.clone(),
            offerings.clone(),
            jobs.clone(),
            testimonials.clone(),
            contacts.clone(),
        );

        Self {
            industry_service: Arc::new(IndustryService::new(
                industries,
                images.clone(),
                catalog_fallback,
            )),
            offering_service: Arc::new(OfferingService::new(offerings, images.clone())),
            testimonial_service: Arc::new(TestimonialService::new(testimonials, images)),
            job_service: Arc::new(JobService::new(jobs)),
            contact_service: Arc::new(ContactService::new(contacts)),
            session_service: Arc::new(session_service),
            dashboard_service: Arc::new(dashboard_service),
        }
    }
}
