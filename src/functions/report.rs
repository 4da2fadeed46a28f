use crate::internal::resources::Resources;
use crate::internal::subtype::Subtype;
use crate::internal::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, ValueEnum, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize,
)]
pub enum OutputFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Serialize)]
struct SubtypeReport<'a> {
    locale: &'a str,
    layout: &'a str,
    layout_name: Option<String>,
    name: String,
}

pub fn render_locales(locales: &[&str], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(locales.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(locales)?),
    }
}

pub fn render_subtypes(
    subtypes: &[Subtype],
    resources: &dyn Resources,
    format: OutputFormat,
) -> Result<String> {
    let reports: Vec<SubtypeReport> = subtypes
        .iter()
        .map(|subtype| SubtypeReport {
            locale: subtype.locale(),
            layout: subtype.keyboard_layout_set(),
            layout_name: subtype.layout_display_name(resources),
            name: subtype.name(resources),
        })
        .collect();
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.locale, r.layout, r.name))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&reports)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::resources::ResourceTable;

    fn sample() -> Vec<Subtype> {
        vec![
            Subtype::new("en_US", "qwerty", Some("QWERTY".into()), false),
            Subtype::new("en_US", "azerty", Some("AZERTY".into()), true),
        ]
    }

    #[test]
    fn text_lists_one_subtype_per_line() {
        let resources = ResourceTable::default();
        let text = render_subtypes(&sample(), &resources, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "en_US\tqwerty\tEnglish (US)\nen_US\tazerty\tEnglish (US) (AZERTY)"
        );
        assert_eq!(render_locales(&["en_US"], OutputFormat::Text).unwrap(), "en_US");
    }

    #[test]
    fn json_carries_resolved_names() {
        let resources = ResourceTable::default();
        let json = render_subtypes(&sample(), &resources, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["layout"], "azerty");
        assert_eq!(value[1]["layout_name"], "AZERTY");
        assert_eq!(value[0]["name"], "English (US)");

        let empty = render_subtypes(&[], &resources, OutputFormat::Json).unwrap();
        assert_eq!(empty, "[]");
    }
}
