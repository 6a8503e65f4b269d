//! Domain layer: content entities, the content gateway traits, and the local
//! catalog.
//!
//! # Architecture
//!
//! - [`entities`] - Stored content records
//! - [`repositories`] - Remote content gateway trait definitions
//! - [`catalog`] - Compiled-in industry dataset used when the gateway fails
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Assembly of presentation-ready content happens in
//! [`crate::application`].

pub mod catalog;
pub mod entities;
pub mod repositories;
