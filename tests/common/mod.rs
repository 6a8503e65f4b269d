#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use site_content::application::images::ImageResolver;
use site_content::application::services::SessionService;
use site_content::domain::entities::{
    ContactSubmission, Industry, Job, NewContactSubmission, Offering, RawBulletPoints, Testimonial,
};
use site_content::domain::repositories::{
    ContactRepository, IndustryRepository, JobRepository, OfferingRepository,
    TestimonialRepository,
};
use site_content::error::AppError;
use site_content::state::{AppState, Repositories};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const SIGNING_SECRET: &str = "integration-test-signing-secret";

/// In-memory table standing in for one Postgres table.
///
/// `fail()` makes every subsequent query return a database error.
pub struct FakeTable<T> {
    rows: Mutex<Vec<T>>,
    failing: AtomicBool,
}

impl<T: Clone> FakeTable<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Mutex::new(rows),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }
}

macro_rules! fake_listed_repository {
    ($trait:ident, $entity:ty) => {
        #[async_trait]
        impl $trait for FakeTable<$entity> {
            async fn list_active(&self) -> Result<Vec<$entity>, AppError> {
                self.check()?;
                let mut rows: Vec<$entity> =
                    self.rows().into_iter().filter(|r| r.is_active).collect();
                rows.sort_by_key(|r| r.order_index);
                Ok(rows)
            }

            async fn find_active_by_slug(&self, slug: &str) -> Result<Option<$entity>, AppError> {
                self.check()?;
                Ok(self
                    .rows()
                    .into_iter()
                    .find(|r| r.is_active && r.slug == slug))
            }

            async fn count_active(&self) -> Result<i64, AppError> {
                self.check()?;
                Ok(self.rows().iter().filter(|r| r.is_active).count() as i64)
            }
        }
    };
}

fake_listed_repository!(IndustryRepository, Industry);
fake_listed_repository!(OfferingRepository, Offering);
fake_listed_repository!(JobRepository, Job);

#[async_trait]
impl TestimonialRepository for FakeTable<Testimonial> {
    async fn list(&self, featured_only: bool) -> Result<Vec<Testimonial>, AppError> {
        self.check()?;
        let mut rows: Vec<Testimonial> = self
            .rows()
            .into_iter()
            .filter(|t| !featured_only || t.is_featured)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.len() as i64)
    }
}

#[async_trait]
impl ContactRepository for FakeTable<ContactSubmission> {
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let stored = ContactSubmission {
            id: rows.len() as i64 + 1,
            name: submission.name,
            email: submission.email,
            message: submission.message,
            details: submission.details,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.len() as i64)
    }
}

/// The whole fake content store.
pub struct FakeStore {
    pub industries: Arc<FakeTable<Industry>>,
    pub offerings: Arc<FakeTable<Offering>>,
    pub testimonials: Arc<FakeTable<Testimonial>>,
    pub jobs: Arc<FakeTable<Job>>,
    pub contacts: Arc<FakeTable<ContactSubmission>>,
}

impl FakeStore {
    pub fn empty() -> Self {
        Self {
            industries: Arc::new(FakeTable::new(Vec::new())),
            offerings: Arc::new(FakeTable::new(Vec::new())),
            testimonials: Arc::new(FakeTable::new(Vec::new())),
            jobs: Arc::new(FakeTable::new(Vec::new())),
            contacts: Arc::new(FakeTable::new(Vec::new())),
        }
    }

    pub fn with_industries(rows: Vec<Industry>) -> Self {
        Self {
            industries: Arc::new(FakeTable::new(rows)),
            ..Self::empty()
        }
    }

    pub fn with_offerings(rows: Vec<Offering>) -> Self {
        Self {
            offerings: Arc::new(FakeTable::new(rows)),
            ..Self::empty()
        }
    }

    /// Makes every table fail.
    pub fn fail_all(&self) {
        self.industries.fail();
        self.offerings.fail();
        self.testimonials.fail();
        self.jobs.fail();
        self.contacts.fail();
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            industries: self.industries.clone(),
            offerings: self.offerings.clone(),
            testimonials: self.testimonials.clone(),
            jobs: self.jobs.clone(),
            contacts: self.contacts.clone(),
        }
    }
}

pub fn create_test_state(store: &FakeStore) -> AppState {
    create_test_state_with_fallback(store, true)
}

pub fn create_test_state_with_fallback(store: &FakeStore, catalog_fallback: bool) -> AppState {
    let sessions = SessionService::new(
        Some(ADMIN_PASSWORD.to_string()),
        SIGNING_SECRET.to_string(),
        Duration::hours(2),
    );

    AppState::new(
        store.repositories(),
        Arc::new(ImageResolver::default()),
        sessions,
        catalog_fallback,
    )
}

pub fn industry(id: i64, slug: &str, name: &str, order_index: i32) -> Industry {
    Industry {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("{name} description"),
        image: None,
        bullet_points: None,
        is_active: true,
        order_index,
        hero_title: None,
        hero_description: None,
        hero_industry_label: None,
        approach_items: Vec::new(),
    }
}

pub fn offering(id: i64, slug: &str, title: &str, order_index: i32) -> Offering {
    Offering {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        description: format!("{title} description"),
        hero_image: None,
        hero_title: None,
        hero_description: None,
        hero_bulletpoints: None,
        is_active: true,
        order_index,
    }
}

pub fn testimonial(id: i64, name: &str, featured: bool, created_at: DateTime<Utc>) -> Testimonial {
    Testimonial {
        id,
        text: format!("Great work from {name}"),
        image: None,
        name: name.to_string(),
        role: "Director".to_string(),
        company: None,
        is_featured: featured,
        created_at,
    }
}

pub fn job(id: i64, slug: &str, title: &str, order_index: i32) -> Job {
    Job {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        location: Some("Remote".to_string()),
        employment_type: Some("Full-time".to_string()),
        description: format!("{title} description"),
        requirements: Some(RawBulletPoints::List(vec!["5 years experience".to_string()])),
        is_active: true,
        order_index,
        created_at: day(1),
    }
}

/// Midnight UTC on the given day of January 2025.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
}
