//! Application layer: content assembly and the services built on it.
//!
//! Services consume the gateway traits from [`crate::domain::repositories`]
//! and hand presentation-ready views to HTTP handlers. Public content
//! services never fail: store errors are logged and degrade to empty,
//! `None`, or catalog content.
//!
//! # Modules
//!
//! - [`images`] - Keyword-table image resolution
//! - [`assembly`] - Record to view conversion
//! - [`defaults`] - Fallback copy templates
//! - [`views`] - Presentation shapes
//! - [`services`] - Page-level services

pub mod assembly;
pub mod defaults;
pub mod images;
pub mod services;
pub mod views;
