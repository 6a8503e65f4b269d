//! Core content entities as they are stored by the remote content store.
//!
//! Entities are plain data. Presentation-ready shapes are produced from them
//! by the assembly services in [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`Industry`] - A sector page with hero copy and approach steps
//! - [`Offering`] - A service the company offers
//! - [`Testimonial`] - A client quote
//! - [`Job`] - An open position
//! - [`ContactSubmission`] - A contact form entry (write-only)
//! - [`AdminSession`] - A signed, expiring admin login
//!
//! List fields whose storage encoding varies are carried as
//! [`RawBulletPoints`] until assembly.

pub mod admin_session;
pub mod bullet_points;
pub mod contact;
pub mod industry;
pub mod job;
pub mod offering;
pub mod testimonial;

pub use admin_session::AdminSession;
pub use bullet_points::RawBulletPoints;
pub use contact::{ContactDetails, ContactSubmission, NewContactSubmission, UserType};
pub use industry::{ApproachItem, Industry};
pub use job::Job;
pub use offering::Offering;
pub use testimonial::Testimonial;

use regex::Regex;
use std::sync::LazyLock;

/// Common view of records that appear in ordered public listings.
pub trait Listed {
    fn slug(&self) -> &str;
    fn is_active(&self) -> bool;
    fn order_index(&self) -> i32;
}

macro_rules! impl_listed {
    ($($ty:ty),+) => {
        $(impl Listed for $ty {
            fn slug(&self) -> &str {
                &self.slug
            }
            fn is_active(&self) -> bool {
                self.is_active
            }
            fn order_index(&self) -> i32 {
                self.order_index
            }
        })+
    };
}

impl_listed!(Industry, Offering, Job);

/// No control characters or `/`, and no surrounding whitespace.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\p{Cc}/](?:[^\p{Cc}/]*[^\s\p{Cc}/])?$").expect("slug regex is valid")
});

/// Returns whether `slug` can be used as a single URL path segment.
///
/// Listings publish only slugs that pass this check, and detail routes look
/// up only slugs that pass it, so every listed record has a working URL.
pub fn is_addressable_slug(slug: &str) -> bool {
    slug.chars().count() <= 128 && SLUG_REGEX.is_match(slug)
}

/// Keeps the records that may be shown publicly, in display order.
///
/// Drops inactive records and active records whose slug is not addressable,
/// then sorts by `order_index`. The sort is stable so equal indexes keep
/// storage order.
pub fn visible_in_order<T: Listed>(records: Vec<T>) -> Vec<T> {
    let mut visible: Vec<T> = records
        .into_iter()
        .filter(|r| {
            if !r.is_active() {
                return false;
            }
            if !is_addressable_slug(r.slug()) {
                tracing::warn!(
                    slug = r.slug(),
                    order_index = r.order_index(),
                    "Dropping active record without a usable slug"
                );
                return false;
            }
            true
        })
        .collect();

    visible.sort_by_key(|r| r.order_index());
    visible
}
