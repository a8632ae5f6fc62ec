//! # roster
//!
//! A small model of students and their grades: normalized names, guarded
//! ages, a status frozen at first read, combination and scaling operators,
//! groups with a top-student query, and an asynchronous grade fetch from a
//! simulated server.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven settings for the grade fetch
pub mod config;
/// The demonstration sequence tying everything together
pub mod driver;
/// Fixed collections of borrowed students
pub mod group;
/// Table and text rendering for the terminal
pub mod report;
/// Asynchronous grade providers
pub mod source;
/// The student entity
pub mod student;

pub use group::{Group, GroupError};
pub use source::{FetchError, GradeSource, SimulatedServer};
pub use student::{Status, Student, StudentError, student};
