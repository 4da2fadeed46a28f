use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// String arrays a resource context has to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayId {
    PredefinedLayouts,
    PredefinedLayoutDisplayNames,
}

/// Handle to a single localized string, resolved at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only key-value lookup backing subtype resolution.
///
/// `PredefinedLayouts` and `PredefinedLayoutDisplayNames` are expected to be
/// index-aligned. Nothing on the resolution path checks that.
pub trait Resources {
    fn string_array(&self, id: ArrayId) -> &[String];

    fn string(&self, id: &ResourceId) -> Option<&str>;

    /// Human readable name of a locale string such as `en_US`.
    fn locale_display_name(&self, locale: &str) -> Option<&str>;
}

/// Resource context loaded from a file or taken from the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTable {
    pub predefined_layouts: Vec<String>,
    pub predefined_layout_display_names: Vec<String>,
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
    #[serde(default)]
    pub locale_display_names: BTreeMap<String, String>,
}

// layout id, display name
const BUILTIN_LAYOUTS: &[(&str, &str)] = &[
    ("qwerty", "QWERTY"),
    ("qwertz", "QWERTZ"),
    ("azerty", "AZERTY"),
    ("dvorak", "Dvorak"),
    ("colemak", "Colemak"),
    ("pcqwerty", "PC"),
];

const BUILTIN_LOCALE_NAMES: &[(&str, &str)] = &[("en_US", "English (US)")];

lazy_static! {
    static ref BUILTIN: ResourceTable = ResourceTable {
        predefined_layouts: BUILTIN_LAYOUTS.iter().map(|(id, _)| id.to_string()).collect(),
        predefined_layout_display_names: BUILTIN_LAYOUTS
            .iter()
            .map(|(_, name)| name.to_string())
            .collect(),
        strings: BTreeMap::new(),
        locale_display_names: BUILTIN_LOCALE_NAMES
            .iter()
            .map(|(locale, name)| (locale.to_string(), name.to_string()))
            .collect(),
    };
}

impl ResourceTable {
    /// Table with the given predefined layouts and nothing else.
    pub fn new<I, S>(layouts: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let (predefined_layouts, predefined_layout_display_names) = layouts
            .into_iter()
            .map(|(id, name)| (id.into(), name.into()))
            .unzip();
        Self {
            predefined_layouts,
            predefined_layout_display_names,
            strings: BTreeMap::new(),
            locale_display_names: BTreeMap::new(),
        }
    }

    pub fn builtin() -> &'static ResourceTable {
        &BUILTIN
    }

    pub fn with_string(mut self, id: &str, text: &str) -> Self {
        self.strings.insert(id.to_string(), text.to_string());
        self
    }

    pub fn with_locale_name(mut self, locale: &str, name: &str) -> Self {
        self.locale_display_names.insert(locale.to_string(), name.to_string());
        self
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Resources for ResourceTable {
    fn string_array(&self, id: ArrayId) -> &[String] {
        match id {
            ArrayId::PredefinedLayouts => &self.predefined_layouts,
            ArrayId::PredefinedLayoutDisplayNames => &self.predefined_layout_display_names,
        }
    }

    fn string(&self, id: &ResourceId) -> Option<&str> {
        self.strings.get(id.as_str()).map(String::as_str)
    }

    fn locale_display_name(&self, locale: &str) -> Option<&str> {
        self.locale_display_names.get(locale).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_arrays_are_aligned() {
        let table = ResourceTable::builtin();
        let layouts = table.string_array(ArrayId::PredefinedLayouts);
        let names = table.string_array(ArrayId::PredefinedLayoutDisplayNames);
        assert_eq!(layouts.len(), names.len());
        assert_eq!(layouts[0], "qwerty");
        assert_eq!(names[0], "QWERTY");
        assert_eq!(table.locale_display_name("en_US"), Some("English (US)"));
    }

    #[test]
    fn new_splits_pairs() {
        let table = ResourceTable::new([("qwerty", "QWERTY"), ("azerty", "AZERTY")])
            .with_string("layout_bepo", "BÉPO");
        assert_eq!(table.predefined_layouts, vec!["qwerty", "azerty"]);
        assert_eq!(table.predefined_layout_display_names, vec!["QWERTY", "AZERTY"]);
        assert_eq!(table.string(&ResourceId::new("layout_bepo")), Some("BÉPO"));
        assert_eq!(table.string(&ResourceId::new("missing")), None);
        assert_eq!(table.locale_display_name("en_US"), None);
    }
}
