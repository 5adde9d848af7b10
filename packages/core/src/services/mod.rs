//! Business Services
//!
//! This module contains the command surface of the engine:
//!
//! - `CourseService` - owns the canonical collections, the derived indexes,
//!   the history log, and the persistence handle; every UI command goes
//!   through it
//!
//! The service coordinates between the data model, the index layer, and
//! storage, enforcing the integrity rules before any mutation is applied.

pub mod course_service;
pub mod error;

pub use course_service::{CourseService, OutlineEntry};
pub use error::ServiceError;
