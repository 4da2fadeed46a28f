use crate::internal::error::{Error, Result};
use crate::internal::resources::ResourceTable;
use std::path::Path;

/// Reads a resource table from a `.toml` file, or JSON for any other extension.
pub fn read_resources(path: &Path) -> Result<ResourceTable> {
    let data = std::fs::read_to_string(path)?;
    log::debug!("[ \x1b[2;1;32mOK\x1b[0m ] Read resource file {path:?}");

    let table: ResourceTable = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&data)?,
        _ => serde_json::from_str(&data)?,
    };
    log::debug!("[ \x1b[2;1;32mOK\x1b[0m ] Parse resource file {path:?}");

    validate(&table)?;
    log::info!(
        "Predefined layouts : {}",
        table.predefined_layouts.join(", ")
    );
    Ok(table)
}

/// The layout and display name arrays are read by index, so they must line up.
fn validate(table: &ResourceTable) -> Result<()> {
    let layouts = table.predefined_layouts.len();
    let names = table.predefined_layout_display_names.len();
    if layouts != names {
        return Err(Error::config(format!(
            "{layouts} predefined layouts but {names} display names"
        )));
    }
    Ok(())
}
