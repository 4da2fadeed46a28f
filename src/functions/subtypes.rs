use crate::internal::builder::SubtypeBuilder;
use crate::internal::locale::{Locale, LocaleMatcher};
use crate::internal::registry::{self, LOCALE_ENGLISH_UNITED_STATES};
use crate::internal::resources::Resources;
use crate::internal::subtype::Subtype;
use std::collections::HashSet;

/// All supported subtype locales, formatted as `ll_CC_variant`.
pub fn supported_locales() -> Vec<&'static str> {
    registry::supported_locales()
}

/// Every subtype for a locale, default first. Empty for unsupported locales.
pub fn subtypes(locale: &str, resources: &dyn Resources) -> Vec<Subtype> {
    SubtypeBuilder::new(locale, true, resources).into_subtypes()
}

/// The default subtype for a locale, or `None` if the locale isn't supported.
pub fn default_subtype(locale: &str, resources: &dyn Resources) -> Option<Subtype> {
    subtypes(locale, resources).into_iter().next()
}

/// The subtype for a specific locale and keyboard layout set.
pub fn subtype(locale: &str, layout_set: &str, resources: &dyn Resources) -> Option<Subtype> {
    SubtypeBuilder::for_layout(locale, layout_set, resources)
        .into_subtypes()
        .into_iter()
        .next()
}

/// Default subtypes for the system's preferred locales.
///
/// Each system locale contributes the default subtype of its best supported
/// match, once per matched locale. Never empty: falls back to English (US).
pub fn default_subtypes(resources: &dyn Resources, matcher: &dyn LocaleMatcher) -> Vec<Subtype> {
    let mut subtypes = collect_defaults(&registry::supported_locales(), matcher, |locale| {
        default_subtype(locale, resources)
    });

    if subtypes.is_empty() {
        // there needs to be at least one default subtype
        log::info!(
            "No system locale is supported, using {}",
            LOCALE_ENGLISH_UNITED_STATES
        );
        subtypes.extend(default_subtype(LOCALE_ENGLISH_UNITED_STATES, resources));
    }
    subtypes
}

/// Matches the system locales against `registered` and asks `default_for`
/// for each matched registry string, in system preference order.
fn collect_defaults<F>(
    registered: &[&str],
    matcher: &dyn LocaleMatcher,
    mut default_for: F,
) -> Vec<Subtype>
where
    F: FnMut(&str) -> Option<Subtype>,
{
    let parsed: Vec<Locale> = registered.iter().map(|locale| Locale::parse(locale)).collect();

    let mut subtypes = Vec::new();
    let mut added: HashSet<usize> = HashSet::new();
    for system_locale in matcher.system_locales() {
        let Some(best) = matcher.find_best_locale(&system_locale, &parsed) else {
            log::debug!("No supported locale for system locale {}", system_locale);
            continue;
        };
        // the registry string is the lookup key, not the reformatted locale
        let Some(index) = parsed.iter().position(|locale| std::ptr::eq(locale, best)) else {
            continue;
        };
        if !added.insert(index) {
            continue;
        }
        log::debug!("System locale {} uses {}", system_locale, registered[index]);
        subtypes.extend(default_for(registered[index]));
    }
    subtypes
}
