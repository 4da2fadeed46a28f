//! Keyboard subtype catalog: which locale and layout combinations an input
//! method offers, and which of them are enabled by default.

pub mod functions;
pub mod internal;

pub use functions::subtypes::{
    default_subtype, default_subtypes, subtype, subtypes, supported_locales,
};
pub use internal::locale::{EnvProvider, Locale, LocaleMatcher, SystemEnv, SystemLocales};
pub use internal::resources::{ArrayId, ResourceId, ResourceTable, Resources};
pub use internal::subtype::{DisplayName, Subtype};
pub use internal::{Error, Result};
