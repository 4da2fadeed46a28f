use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured form of a `language_COUNTRY_variant` locale string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            country: country.to_uppercase(),
            variant: variant.to_string(),
        }
    }

    /// Parses strings such as `en`, `en_US`, `en-US`, `en_US.UTF-8` or
    /// `de_DE@euro`. Never fails; garbage in gives a locale that matches nothing.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let text = text.split(['.', '@']).next().unwrap_or_default();
        let mut parts = text.splitn(3, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();
        Self::new(language, country, variant)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn is_empty(&self) -> bool {
        self.language.is_empty()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

/// How closely a candidate locale matches a target. Ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchLevel {
    None,
    Language,
    Country,
    Full,
}

pub fn match_level(target: &Locale, candidate: &Locale) -> MatchLevel {
    if target.is_empty() || target.language != candidate.language {
        return MatchLevel::None;
    }
    if target.country != candidate.country {
        return MatchLevel::Language;
    }
    if target.variant != candidate.variant {
        return MatchLevel::Country;
    }
    MatchLevel::Full
}

/// Source of the platform's preferred locales and of locale matching.
pub trait LocaleMatcher {
    /// Preferred locales of the running system, most preferred first.
    fn system_locales(&self) -> Vec<Locale>;

    /// Picks the candidate that best matches `target`, or `None` when no
    /// candidate shares its language. Earlier candidates win ties.
    fn find_best_locale<'a>(
        &self,
        target: &Locale,
        candidates: &'a [Locale],
    ) -> Option<&'a Locale> {
        let mut best: Option<(&Locale, MatchLevel)> = None;
        for candidate in candidates {
            let level = match_level(target, candidate);
            if level == MatchLevel::None {
                continue;
            }
            match best {
                Some((_, best_level)) if best_level >= level => {}
                _ => best = Some((candidate, level)),
            }
        }
        log::trace!("Best locale for {} : {:?}", target, best);
        best.map(|(locale, _)| locale)
    }
}

/// Read-only environment access used for locale discovery.
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Variables consulted for the system locales, highest precedence first.
const LOCALE_VARS: &[&str] = &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale matcher reading the POSIX locale environment.
#[derive(Debug, Default, Clone)]
pub struct SystemLocales<E = SystemEnv> {
    env: E,
}

impl SystemLocales<SystemEnv> {
    pub fn new() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: EnvProvider> SystemLocales<E> {
    pub fn with_env(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvProvider> LocaleMatcher for SystemLocales<E> {
    fn system_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = Vec::new();
        for var in LOCALE_VARS {
            let Some(value) = self.env.var(var) else {
                continue;
            };
            // LANGUAGE is a colon separated priority list, the others hold one value
            for entry in value.split(':') {
                let entry = entry.trim();
                if entry.is_empty() || entry == "C" || entry == "POSIX" || entry.starts_with("C.") {
                    continue;
                }
                let locale = Locale::parse(entry);
                if !locale.is_empty() && !locales.contains(&locale) {
                    locales.push(locale);
                }
            }
        }
        log::debug!("System locales : {:?}", locales);
        locales
    }
}
