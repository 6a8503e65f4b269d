//! Server-rendered pages.
//!
//! Industry and service pages render assembled content with Askama
//! templates. Every page has an explicit state for "no content" so a
//! store outage or an empty table never yields a broken page.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
