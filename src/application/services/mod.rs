//! Business logic services for the application layer.

pub mod contact_service;
pub mod dashboard_service;
pub mod industry_service;
pub mod job_service;
pub mod offering_service;
pub mod session_service;
pub mod testimonial_service;

pub use contact_service::ContactService;
pub use dashboard_service::{DashboardCounters, DashboardService};
pub use industry_service::IndustryService;
pub use job_service::JobService;
pub use offering_service::OfferingService;
pub use session_service::SessionService;
pub use testimonial_service::TestimonialService;
