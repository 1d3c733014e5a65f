pub mod catalog;
pub mod reporting;
