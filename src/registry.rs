//! The language registry: the ordered catalogue plus every collection derived
//! from it.
//!
//! Everything here is computed once in [`RegistryBuilder::build`] and never
//! mutated afterwards, so a `Registry` can be shared freely between threads.
//! Most callers want [`Registry::global`], which wraps the built-in catalogue.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    error::{LangError, LangResult},
    lang::{LANGUAGES, LanguageItem},
};

/// Priority given to locales that are not in the catalogue. Lower than every
/// real language but finite, so unknown tracks still keep their input order.
pub const DEFAULT_FALLBACK_PRIORITY: usize = 50;

/// Extra entries offered in front of the real locales by subtitle filters.
pub const SUBTITLE_FILTER_EXTRAS: [&str; 2] = ["all", "none"];

/// Two word characters, an optional dash, two word characters: `en-us`, `enUS`.
pub(crate) const TAG_SHAPE: &str = r"^([A-Za-z0-9_]{2})-?([A-Za-z0-9_]{2})$";

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builder()
        .build()
        .expect("built-in language table failed to build – this is a bug")
});

/// Knobs for building a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct RegistryConfig {
    pub languages: &'static [LanguageItem],
    pub fallback_priority: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            languages: LANGUAGES,
            fallback_priority: DEFAULT_FALLBACK_PRIORITY,
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    pub(crate) config: RegistryConfig,
    pub(crate) dub_language_codes: Vec<&'static str>,
    pub(crate) subtitle_languages_filter: Vec<&'static str>,
    pub(crate) search_locales: Vec<&'static str>,
    /// name → code, in catalogue order, first code per name.
    pub(crate) dub_languages: Vec<(&'static str, &'static str)>,
    pub(crate) locale_priority: HashMap<&'static str, usize>,
    pub(crate) dub_regex: Regex,
    pub(crate) tag_shape: Regex,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry over the built-in catalogue.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn new(config: RegistryConfig) -> LangResult<Self> {
        let languages = config.languages;
        if languages.is_empty() {
            return Err(LangError::EmptyCatalogue);
        }

        let dub_language_codes = unique(languages.iter().map(|l| l.code));

        let locales = unique(languages.iter().map(|l| l.locale));
        let locale_priority = locales
            .iter()
            .enumerate()
            .map(|(i, &locale)| (locale, i + 1))
            .collect::<HashMap<_, _>>();

        let mut subtitle_languages_filter = SUBTITLE_FILTER_EXTRAS.to_vec();
        subtitle_languages_filter.extend(locales);

        // The final row never takes part in search.
        let searchable = &languages[..languages.len() - 1];
        let mut search_locales = vec![""];
        search_locales.extend(unique(searchable.iter().filter_map(|l| l.cr_locale)));

        let mut dub_languages: Vec<(&'static str, &'static str)> = Vec::new();
        for lang in languages {
            if !dub_languages.iter().any(|(name, _)| *name == lang.name) {
                dub_languages.push((lang.name, lang.code));
            }
        }

        let dub_regex = Regex::new(&dub_pattern(dub_languages.iter().map(|(name, _)| *name)))?;
        let tag_shape = Regex::new(TAG_SHAPE)?;

        debug!(
            entries = languages.len(),
            locales = locale_priority.len(),
            dub_languages = dub_languages.len(),
            fallback_priority = config.fallback_priority,
            "language registry built"
        );

        Ok(Self {
            config,
            dub_language_codes,
            subtitle_languages_filter,
            search_locales,
            dub_languages,
            locale_priority,
            dub_regex,
            tag_shape,
        })
    }

    #[inline(always)]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The catalogue, in priority order.
    #[inline(always)]
    pub fn languages(&self) -> &'static [LanguageItem] {
        self.config.languages
    }

    /// Unique language codes in first-seen order.
    pub fn dub_language_codes(&self) -> &[&'static str] {
        &self.dub_language_codes
    }

    /// `all`, `none`, then every unique locale.
    pub fn subtitle_languages_filter(&self) -> &[&'static str] {
        &self.subtitle_languages_filter
    }

    /// An empty entry followed by the unique `crunchy` tags of every row but
    /// the last one.
    pub fn search_locales(&self) -> &[&'static str] {
        &self.search_locales
    }

    /// `(name, code)` pairs, first code seen for each display name.
    pub fn dub_languages(&self) -> &[(&'static str, &'static str)] {
        &self.dub_languages
    }

    /// Matches a trailing `(Name)`, `(Name Dub)` or `(Name VO)` in a title.
    pub fn dub_regex(&self) -> &Regex {
        &self.dub_regex
    }

    /// 1-based position of `locale` among the unique catalogue locales.
    #[inline]
    pub fn locale_priority(&self, locale: &str) -> Option<usize> {
        self.locale_priority.get(locale).copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// Replace the built-in catalogue. Row order becomes sort order.
    pub fn languages(mut self, languages: &'static [LanguageItem]) -> Self {
        self.config.languages = languages;
        self
    }

    pub fn fallback_priority(mut self, priority: usize) -> Self {
        self.config.fallback_priority = priority;
        self
    }

    pub fn build(self) -> LangResult<Registry> {
        Registry::new(self.config)
    }
}

fn unique<I>(items: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'static str>,
{
    let mut out: Vec<&'static str> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn dub_pattern<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let alternatives = names.map(regex::escape).collect::<Vec<_>>().join("|");
    format!(r"\(({alternatives})(?: (Dub|VO))?\)$")
}
