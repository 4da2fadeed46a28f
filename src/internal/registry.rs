use lazy_static::lazy_static;
use std::collections::HashMap;

pub const LOCALE_ENGLISH_UNITED_STATES: &str = "en_US";

pub const LAYOUT_QWERTY: &str = "qwerty";

/// One instruction in a locale's subtype recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A single layout, named from the predefined layout table when listed there.
    Layout(&'static str),
    /// A single layout whose name is a string resource.
    NamedLayout {
        layout: &'static str,
        name: &'static str,
    },
    /// Every predefined layout not already added.
    GenericLayouts,
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleEntry {
    /// Subtype locale string, e.g. `en_US`.
    pub locale: &'static str,
    /// The first subtype the recipe produces is the locale's default.
    pub recipe: &'static [Step],
}

// Add/extend here - adding a locale is a data change only.
pub static SUPPORTED_LOCALES: &[LocaleEntry] = &[LocaleEntry {
    locale: LOCALE_ENGLISH_UNITED_STATES,
    recipe: &[Step::Layout(LAYOUT_QWERTY), Step::GenericLayouts],
}];

lazy_static! {
    static ref BY_LOCALE: HashMap<&'static str, &'static LocaleEntry> =
        SUPPORTED_LOCALES.iter().map(|entry| (entry.locale, entry)).collect();
}

/// Supported locale strings in registry order.
pub fn supported_locales() -> Vec<&'static str> {
    SUPPORTED_LOCALES.iter().map(|entry| entry.locale).collect()
}

pub fn recipe_for(locale: &str) -> Option<&'static [Step]> {
    BY_LOCALE.get(locale).map(|entry| entry.recipe)
}

#[inline]
pub fn is_supported(locale: &str) -> bool {
    BY_LOCALE.contains_key(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_locale_is_registered() {
        assert!(is_supported(LOCALE_ENGLISH_UNITED_STATES));
        assert_eq!(supported_locales(), vec![LOCALE_ENGLISH_UNITED_STATES]);
    }

    #[test]
    fn recipes_start_with_a_layout() {
        for entry in SUPPORTED_LOCALES {
            let first = entry.recipe.first();
            assert!(
                matches!(first, Some(Step::Layout(_)) | Some(Step::NamedLayout { .. })),
                "{} has no default layout",
                entry.locale
            );
        }
        assert_eq!(
            recipe_for("en_US"),
            Some(&[Step::Layout(LAYOUT_QWERTY), Step::GenericLayouts][..])
        );
    }

    #[test]
    fn unknown_locales_have_no_recipe() {
        assert_eq!(recipe_for("fr_FR"), None);
        assert_eq!(recipe_for("en_us"), None);
        assert!(!is_supported(""));
    }
}
