mod args;
mod logging;

use crate::args::{Cli, Command};
use clap::Parser;
use subtype_catalog::functions::report;
use subtype_catalog::functions::subtypes;
use subtype_catalog::internal::config;
use subtype_catalog::internal::{crash, registry};
use subtype_catalog::{ResourceTable, Subtype, SystemLocales};

fn main() {
    human_panic::setup_panic!();
    let cli = Cli::parse();
    let _logger = match logging::init(cli.verbose, cli.log_file.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Start logger ERROR: {e}");
            std::process::exit(1);
        }
    };

    let resources = match &cli.resources {
        Some(path) => config::read_resources(path).unwrap_or_else(|e| {
            crash(format!("Read resource file {path:?}  ERROR: {e}"), e.exit_code())
        }),
        None => ResourceTable::default(),
    };

    let rendered = match cli.command {
        Command::Locales => report::render_locales(&subtypes::supported_locales(), cli.format),
        Command::Subtypes(args) => {
            if !registry::is_supported(&args.locale) {
                log::warn!("Locale {} is not supported", args.locale);
            }
            let found = subtypes::subtypes(&args.locale, &resources);
            report::render_subtypes(&found, &resources, cli.format)
        }
        Command::Default(args) => {
            let found = require(
                subtypes::default_subtype(&args.locale, &resources),
                &format!("No default subtype for locale {}", args.locale),
            );
            report::render_subtypes(&[found], &resources, cli.format)
        }
        Command::Subtype(args) => {
            let found = require(
                subtypes::subtype(&args.locale, &args.layout, &resources),
                &format!("No subtype for locale {} with layout {}", args.locale, args.layout),
            );
            report::render_subtypes(&[found], &resources, cli.format)
        }
        Command::SystemDefaults => {
            let found = subtypes::default_subtypes(&resources, &SystemLocales::new());
            report::render_subtypes(&found, &resources, cli.format)
        }
    };

    match rendered {
        Ok(text) if text.is_empty() => {}
        Ok(text) => println!("{text}"),
        Err(e) => crash(format!("Render output  ERROR: {e}"), e.exit_code()),
    }
}

fn require(subtype: Option<Subtype>, msg: &str) -> Subtype {
    match subtype {
        Some(subtype) => subtype,
        None => crash(msg, 1),
    }
}
