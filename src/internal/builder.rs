use crate::internal::registry::{self, Step};
use crate::internal::resources::{ArrayId, ResourceId, Resources};
use crate::internal::subtype::Subtype;
use once_cell::unsync::OnceCell;

/// Which of a locale's subtypes a builder is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    All,
    /// Only the first subtype the recipe produces.
    DefaultOnly,
    /// Only the subtype with this keyboard layout set.
    SpecificLayout(String),
}

/// Builds the subtypes of one locale.
///
/// The locale's recipe always walks every step; the policy decides which of
/// the layouts actually get built. Results are computed once per builder.
pub struct SubtypeBuilder<'a> {
    resources: &'a dyn Resources,
    locale: String,
    policy: Policy,
    subtypes: OnceCell<Vec<Subtype>>,
}

impl<'a> SubtypeBuilder<'a> {
    /// Builder for one (`all == false`) or every subtype of a locale.
    pub fn new(locale: &str, all: bool, resources: &'a dyn Resources) -> Self {
        let policy = if all { Policy::All } else { Policy::DefaultOnly };
        Self::with_policy(locale, policy, resources)
    }

    /// Builder for the single subtype of a locale using `layout_set`.
    pub fn for_layout(locale: &str, layout_set: &str, resources: &'a dyn Resources) -> Self {
        Self::with_policy(
            locale,
            Policy::SpecificLayout(layout_set.to_string()),
            resources,
        )
    }

    pub fn with_policy(locale: &str, policy: Policy, resources: &'a dyn Resources) -> Self {
        Self {
            resources,
            locale: locale.to_string(),
            policy,
            subtypes: OnceCell::new(),
        }
    }

    pub fn subtypes(&self) -> &[Subtype] {
        self.subtypes.get_or_init(|| self.build())
    }

    pub fn into_subtypes(self) -> Vec<Subtype> {
        self.subtypes();
        self.subtypes.into_inner().unwrap_or_default()
    }

    fn build(&self) -> Vec<Subtype> {
        let Some(recipe) = registry::recipe_for(&self.locale) else {
            log::debug!("No subtypes registered for locale {}", self.locale);
            return Vec::new();
        };
        self.run_recipe(recipe)
    }

    /// Walks every step of `recipe`; the policy filters what gets built.
    fn run_recipe(&self, recipe: &[Step]) -> Vec<Subtype> {
        let mut subtypes = Vec::new();
        for step in recipe {
            match *step {
                Step::Layout(layout) => self.add_layout(&mut subtypes, layout),
                Step::NamedLayout { layout, name } => {
                    self.add_named_layout(&mut subtypes, layout, ResourceId::new(name))
                }
                Step::GenericLayouts => self.add_generic_layouts(&mut subtypes),
            }
        }
        log::debug!(
            "Built {} subtype(s) for {} ({:?})",
            subtypes.len(),
            self.locale,
            self.policy
        );
        subtypes
    }

    fn should_skip_layout(&self, built: &[Subtype], layout_set: &str) -> bool {
        let skip = match &self.policy {
            Policy::All => false,
            Policy::DefaultOnly => !built.is_empty(),
            Policy::SpecificLayout(expected) => !built.is_empty() || expected != layout_set,
        };
        skip || built.iter().any(|s| s.keyboard_layout_set() == layout_set)
    }

    fn add_layout(&self, built: &mut Vec<Subtype>, layout_set: &str) {
        if self.should_skip_layout(built, layout_set) {
            return;
        }
        // a predefined layout carries its name from the table
        let layouts = self.resources.string_array(ArrayId::PredefinedLayouts);
        let layout_name = layouts
            .iter()
            .position(|layout| layout == layout_set)
            .and_then(|index| {
                self.resources
                    .string_array(ArrayId::PredefinedLayoutDisplayNames)
                    .get(index)
                    .cloned()
            });
        log::trace!("Add layout {} for {}", layout_set, self.locale);
        built.push(Subtype::new(&self.locale, layout_set, layout_name, false));
    }

    fn add_named_layout(
        &self,
        built: &mut Vec<Subtype>,
        layout_set: &str,
        layout_res: ResourceId,
    ) {
        if self.should_skip_layout(built, layout_set) {
            return;
        }
        log::trace!("Add layout {} ({}) for {}", layout_set, layout_res, self.locale);
        built.push(Subtype::with_resource(&self.locale, layout_set, layout_res, true));
    }

    fn add_generic_layouts(&self, built: &mut Vec<Subtype>) {
        if !built.is_empty() && self.policy != Policy::All {
            return;
        }
        let layouts = self.resources.string_array(ArrayId::PredefinedLayouts);
        let names = self
            .resources
            .string_array(ArrayId::PredefinedLayoutDisplayNames);
        for (index, layout_set) in layouts.iter().enumerate() {
            if self.should_skip_layout(built, layout_set) {
                continue;
            }
            log::trace!("Add generic layout {} for {}", layout_set, self.locale);
            built.push(Subtype::new(
                &self.locale,
                layout_set,
                names.get(index).cloned(),
                true,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::resources::ResourceTable;
    use crate::internal::subtype::DisplayName;

    fn table() -> ResourceTable {
        ResourceTable::new([("qwerty", "QWERTY"), ("azerty", "AZERTY"), ("dvorak", "Dvorak")])
    }

    fn layouts(subtypes: &[Subtype]) -> Vec<&str> {
        subtypes.iter().map(Subtype::keyboard_layout_set).collect()
    }

    #[test]
    fn all_builds_primary_then_generic_layouts() {
        let resources = table();
        let builder = SubtypeBuilder::new("en_US", true, &resources);
        let subtypes = builder.subtypes();
        assert_eq!(layouts(subtypes), vec!["qwerty", "azerty", "dvorak"]);
        assert!(!subtypes[0].show_layout_in_name());
        assert!(subtypes[1..].iter().all(Subtype::show_layout_in_name));
        assert_eq!(subtypes[1].layout_display_name(&resources).as_deref(), Some("AZERTY"));
    }

    #[test]
    fn default_only_stops_after_first() {
        let resources = table();
        let builder = SubtypeBuilder::new("en_US", false, &resources);
        assert_eq!(layouts(builder.subtypes()), vec!["qwerty"]);
    }

    #[test]
    fn specific_layout_builds_only_that_layout() {
        let resources = table();
        let builder = SubtypeBuilder::for_layout("en_US", "dvorak", &resources);
        let subtypes = builder.into_subtypes();
        assert_eq!(subtypes.len(), 1);
        assert_eq!(subtypes[0].keyboard_layout_set(), "dvorak");
        assert_eq!(subtypes[0].layout_display_name(&resources).as_deref(), Some("Dvorak"));

        let missing = SubtypeBuilder::for_layout("en_US", "colemak", &resources);
        assert!(missing.subtypes().is_empty());
    }

    #[test]
    fn primary_layout_missing_from_table_has_no_name() {
        let resources = ResourceTable::new([("azerty", "AZERTY")]);
        let builder = SubtypeBuilder::new("en_US", true, &resources);
        let subtypes = builder.subtypes();
        assert_eq!(layouts(subtypes), vec!["qwerty", "azerty"]);
        assert_eq!(subtypes[0].layout_name(), None);
    }

    #[test]
    fn layouts_are_never_duplicated() {
        let resources = ResourceTable::new([
            ("azerty", "AZERTY"),
            ("qwerty", "QWERTY"),
            ("azerty", "AZERTY again"),
        ]);
        let builder = SubtypeBuilder::new("en_US", true, &resources);
        assert_eq!(layouts(builder.subtypes()), vec!["qwerty", "azerty"]);
        // the primary layout keeps the table name found at its own index
        assert_eq!(
            builder.subtypes()[0].layout_display_name(&resources).as_deref(),
            Some("QWERTY")
        );
    }

    #[test]
    fn misaligned_names_do_not_panic() {
        let mut resources = table();
        resources.predefined_layout_display_names.truncate(1);
        let builder = SubtypeBuilder::new("en_US", true, &resources);
        let subtypes = builder.subtypes();
        assert_eq!(subtypes.len(), 3);
        assert_eq!(subtypes[2].layout_name(), None);
    }

    #[test]
    fn unknown_locale_builds_nothing() {
        let resources = table();
        assert!(SubtypeBuilder::new("fr_FR", true, &resources).subtypes().is_empty());
        assert!(SubtypeBuilder::for_layout("fr_FR", "qwerty", &resources)
            .subtypes()
            .is_empty());
    }

    const BEPO_RECIPE: &[Step] = &[
        Step::NamedLayout {
            layout: "bepo",
            name: "layout_bepo",
        },
        Step::NamedLayout {
            layout: "bepo",
            name: "layout_bepo",
        },
        Step::GenericLayouts,
    ];

    #[test]
    fn named_layout_comes_first_and_is_not_repeated() {
        let resources = table().with_string("layout_bepo", "BÉPO");
        let builder = SubtypeBuilder::new("fr_FR", true, &resources);
        let subtypes = builder.run_recipe(BEPO_RECIPE);
        assert_eq!(layouts(&subtypes), vec!["bepo", "qwerty", "azerty", "dvorak"]);
        assert_eq!(
            subtypes[0].layout_name(),
            Some(&DisplayName::ResourceRef(ResourceId::new("layout_bepo")))
        );
        assert!(subtypes[0].show_layout_in_name());
        assert_eq!(subtypes[0].locale(), "fr_FR");
        assert_eq!(subtypes[0].name(&resources), "fr_FR (BÉPO)");
    }

    #[test]
    fn named_layout_is_the_default() {
        let resources = table();
        let builder = SubtypeBuilder::new("fr_FR", false, &resources);
        assert_eq!(layouts(&builder.run_recipe(BEPO_RECIPE)), vec!["bepo"]);
    }

    #[test]
    fn specific_layout_skips_named_layouts() {
        let resources = table();
        let builder = SubtypeBuilder::for_layout("fr_FR", "azerty", &resources);
        let subtypes = builder.run_recipe(BEPO_RECIPE);
        assert_eq!(layouts(&subtypes), vec!["azerty"]);
        assert_eq!(
            subtypes[0].layout_name(),
            Some(&DisplayName::Literal("AZERTY".to_string()))
        );

        let bepo = SubtypeBuilder::for_layout("fr_FR", "bepo", &resources);
        assert_eq!(layouts(&bepo.run_recipe(BEPO_RECIPE)), vec!["bepo"]);
    }

    #[test]
    fn subtypes_are_built_once() {
        let resources = table();
        let builder = SubtypeBuilder::new("en_US", true, &resources);
        let first = builder.subtypes().as_ptr();
        let second = builder.subtypes().as_ptr();
        assert_eq!(first, second);
    }
}
