pub mod report;
pub mod subtypes;
