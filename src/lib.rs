pub mod error;
pub mod format;
pub mod lang;
pub mod normalize;
pub mod registry;
pub mod service;
pub mod sort;
pub mod subtitles;

pub use error::{LangError, LangResult};
pub use format::{DubMarker, DubMatch, subs_file};
pub use lang::{LANGUAGES, LanguageItem, UNDETERMINED, all_languages};
pub use registry::{DEFAULT_FALLBACK_PRIORITY, Registry, RegistryBuilder, RegistryConfig};
pub use service::Service;
pub use sort::SortKey;

/// [`Registry::find_lang`] on the global registry.
#[inline]
pub fn find_lang(cr_locale: &str) -> &'static LanguageItem {
    Registry::global().find_lang(cr_locale)
}

/// [`Registry::fix_and_find_cr_lc`] on the global registry.
#[inline]
pub fn fix_and_find_cr_lc(cr_locale: &str) -> &'static LanguageItem {
    Registry::global().fix_and_find_cr_lc(Some(cr_locale))
}

/// [`Registry::parse_rss_subtitles_string`] on the global registry.
#[inline]
pub fn parse_rss_subtitles_string(subs: &str) -> String {
    Registry::global().parse_rss_subtitles_string(subs)
}

/// [`Registry::parse_subtitles_array`] on the global registry.
#[inline]
pub fn parse_subtitles_array<S: AsRef<str>>(tags: &[S]) -> String {
    Registry::global().parse_subtitles_array(tags)
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
