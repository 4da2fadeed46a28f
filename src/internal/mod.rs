pub mod builder;
pub mod config;
pub mod error;
pub mod locale;
pub mod registry;
pub mod resources;
pub mod subtype;

pub use error::{crash, Error, Result};
