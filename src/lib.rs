//! Career guidance for class 10 and 12 students in Jammu & Kashmir.
//!
//! Two pure computations sit at the core: [`scoring::calculate_results`]
//! ranks the four streams from quiz answers, and
//! [`directory::filter_colleges`] narrows and orders the college list. Both
//! read from the immutable [`catalog::Catalog`].

pub mod browser;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod output;
pub mod profile;
pub mod quiz;
pub mod scoring;

pub use error::ValidationError;
