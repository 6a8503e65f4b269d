//! Admin dashboard counters.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::repositories::{
    ContactRepository, IndustryRepository, JobRepository, OfferingRepository,
    TestimonialRepository,
};
use crate::error::AppError;

/// Record counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCounters {
    pub industries: i64,
    pub services: i64,
    pub jobs: i64,
    pub testimonials: i64,
    pub contact_submissions: i64,
}

/// Unlike the public content services, this one reports store failures to
/// its caller.
pub struct DashboardService {
    industries: Arc<dyn IndustryRepository>,
    offerings: Arc<dyn OfferingRepository>,
    jobs: Arc<dyn JobRepository>,
    testimonials: Arc<dyn TestimonialRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl DashboardService {
    pub fn new(
        industries: Arc<dyn IndustryRepository>,
        offerings: Arc<dyn OfferingRepository>,
        jobs: Arc<dyn JobRepository>,
        testimonials: Arc<dyn TestimonialRepository>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            industries,
            offerings,
            jobs,
            testimonials,
            contacts,
        }
    }

    /// Counts active industries, services and jobs, plus all testimonials
    /// and contact submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any count fails.
    pub async fn counters(&self) -> Result<DashboardCounters, AppError> {
        Ok(DashboardCounters {
            industries: self.industries.count_active().await?,
            services: self.offerings.count_active().await?,
            jobs: self.jobs.count_active().await?,
            testimonials: self.testimonials.count().await?,
            contact_submissions: self.contacts.count().await?,
        })
    }
}
