use crate::internal::resources::{ResourceId, Resources};
use serde::Serialize;

/// Where a subtype's layout name comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayName {
    Literal(String),
    ResourceRef(ResourceId),
}

impl DisplayName {
    pub fn resolve<'a>(&'a self, resources: &'a dyn Resources) -> Option<&'a str> {
        match self {
            DisplayName::Literal(text) => Some(text.as_str()),
            DisplayName::ResourceRef(id) => resources.string(id),
        }
    }
}

/// A locale and keyboard layout pair the input method can offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subtype {
    locale: String,
    keyboard_layout_set: String,
    layout_name: Option<DisplayName>,
    show_layout_in_name: bool,
}

impl Subtype {
    pub fn new(
        locale: &str,
        keyboard_layout_set: &str,
        layout_name: Option<String>,
        show_layout_in_name: bool,
    ) -> Self {
        Self {
            locale: locale.to_string(),
            keyboard_layout_set: keyboard_layout_set.to_string(),
            layout_name: layout_name.map(DisplayName::Literal),
            show_layout_in_name,
        }
    }

    pub fn with_resource(
        locale: &str,
        keyboard_layout_set: &str,
        layout_res: ResourceId,
        show_layout_in_name: bool,
    ) -> Self {
        Self {
            locale: locale.to_string(),
            keyboard_layout_set: keyboard_layout_set.to_string(),
            layout_name: Some(DisplayName::ResourceRef(layout_res)),
            show_layout_in_name,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn keyboard_layout_set(&self) -> &str {
        &self.keyboard_layout_set
    }

    pub fn layout_name(&self) -> Option<&DisplayName> {
        self.layout_name.as_ref()
    }

    pub fn show_layout_in_name(&self) -> bool {
        self.show_layout_in_name
    }

    pub fn layout_display_name(&self, resources: &dyn Resources) -> Option<String> {
        self.layout_name
            .as_ref()
            .and_then(|name| name.resolve(resources))
            .map(str::to_string)
    }

    /// Label shown to the user, e.g. `English (US)` or `English (US) (AZERTY)`.
    pub fn name(&self, resources: &dyn Resources) -> String {
        let locale_name = resources
            .locale_display_name(&self.locale)
            .unwrap_or(self.locale.as_str());
        match self.layout_display_name(resources) {
            Some(layout) if self.show_layout_in_name => format!("{locale_name} ({layout})"),
            _ => locale_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::resources::ResourceTable;

    #[test]
    fn name_appends_layout_only_when_requested() {
        let resources = ResourceTable::new([("azerty", "AZERTY")])
            .with_locale_name("en_US", "English (US)");

        let primary = Subtype::new("en_US", "qwerty", Some("QWERTY".into()), false);
        assert_eq!(primary.name(&resources), "English (US)");

        let generic = Subtype::new("en_US", "azerty", Some("AZERTY".into()), true);
        assert_eq!(generic.name(&resources), "English (US) (AZERTY)");

        let unnamed = Subtype::new("en_US", "custom", None, true);
        assert_eq!(unnamed.layout_display_name(&resources), None);
        assert_eq!(unnamed.name(&resources), "English (US)");
    }

    #[test]
    fn resource_names_resolve_lazily() {
        let subtype =
            Subtype::with_resource("fr_FR", "bepo", ResourceId::new("layout_bepo"), true);
        assert_eq!(
            subtype.layout_name(),
            Some(&DisplayName::ResourceRef(ResourceId::new("layout_bepo")))
        );

        let empty = ResourceTable::new(Vec::<(String, String)>::new());
        assert_eq!(subtype.layout_display_name(&empty), None);
        assert_eq!(subtype.name(&empty), "fr_FR");

        let named = empty.with_string("layout_bepo", "BÉPO");
        assert_eq!(subtype.layout_display_name(&named).as_deref(), Some("BÉPO"));
        assert_eq!(subtype.name(&named), "fr_FR (BÉPO)");
    }
}
