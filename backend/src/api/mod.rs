//! Directory API exports.

pub mod restaurants;
pub mod dataset_overview;
