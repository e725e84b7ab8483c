//! File names and title suffixes.

use tracing::debug;

use crate::{
    error::{LangError, LangResult},
    lang::LanguageItem,
    registry::Registry,
};

/// Extension of every subtitle file written by the downloader.
pub const SUBTITLE_EXTENSION: &str = "ass";

/// Build `<base>.<NN>.<code>.<language>[.<cc_tag>].ass`.
///
/// `subs_index` is the 0-based track index as text; the file name carries it
/// 1-based and zero-padded to two digits. Anything that is not an integer
/// (surrounding whitespace aside) is rejected instead of ending up in the
/// file name.
pub fn subs_file(
    fn_output_base: &str,
    subs_index: &str,
    lang: &LanguageItem,
    is_closed_caption: bool,
    cc_tag: &str,
) -> LangResult<String> {
    let index = subs_index
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|i| i.checked_add(1))
        .ok_or_else(|| {
            debug!(subs_index, "rejecting subtitle index");
            LangError::InvalidSubsIndex(subs_index.to_string())
        })?;

    let mut name = format!("{fn_output_base}.{index:02}.{}.{}", lang.code, lang.language);
    if is_closed_caption {
        name.push('.');
        name.push_str(cc_tag);
    }
    name.push('.');
    name.push_str(SUBTITLE_EXTENSION);
    Ok(name)
}

/// Suffix marker after the language name in `(English Dub)` / `(French VO)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DubMarker {
    Dub,
    Vo,
}

/// A dub suffix found at the end of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DubMatch {
    pub name: &'static str,
    pub code: &'static str,
    pub marker: Option<DubMarker>,
}

impl Registry {
    /// Display name for a language code, e.g. `jpn` → `Japanese`.
    ///
    /// The code's position among the unique codes selects the name at the
    /// same position among the dub-language names.
    pub fn lang_code_to_name(&self, code: &str) -> Option<&'static str> {
        let idx = self.dub_language_codes.iter().position(|c| *c == code)?;
        self.dub_languages.get(idx).map(|(name, _)| *name)
    }

    /// First catalogue row with the given internal locale.
    pub fn locale_to_language(&self, locale: &str) -> Option<&'static LanguageItem> {
        self.languages().iter().find(|l| l.locale == locale)
    }

    /// Look for a trailing `(Language)`, `(Language Dub)` or `(Language VO)`.
    pub fn dub_language_in(&self, title: &str) -> Option<DubMatch> {
        let caps = self.dub_regex.captures(title)?;
        let matched = caps.get(1)?.as_str();
        let (name, code) = self
            .dub_languages
            .iter()
            .find(|(name, _)| *name == matched)
            .copied()?;
        let marker = caps.get(2).map(|m| match m.as_str() {
            "Dub" => DubMarker::Dub,
            _ => DubMarker::Vo,
        });
        Some(DubMatch { name, code, marker })
    }
}
