use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use subtype_catalog::functions::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "subtype-catalog")]
#[command(author=env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Resource table (JSON or TOML) with the predefined layouts
    #[arg(short, long, global = true)]
    pub resources: Option<PathBuf>,

    /// Also write the log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported subtype locales
    #[command(name = "locales")]
    Locales,

    /// List every subtype of a locale
    #[command(name = "subtypes")]
    Subtypes(LocaleArgs),

    /// Show the default subtype of a locale
    #[command(name = "default")]
    Default(LocaleArgs),

    /// Show the subtype of a locale with a specific keyboard layout
    #[command(name = "subtype")]
    Subtype(LayoutArgs),

    /// Show the default subtypes for the system locales
    #[command(name = "system-defaults")]
    SystemDefaults,
}

#[derive(Debug, Args)]
pub struct LocaleArgs {
    /// The subtype locale, e.g. en_US
    pub locale: String,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// The subtype locale, e.g. en_US
    pub locale: String,

    /// The keyboard layout set, e.g. qwerty
    pub layout: String,
}
