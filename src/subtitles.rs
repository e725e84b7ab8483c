//! Human-readable subtitle locale lists.

use smallvec::SmallVec;

use crate::registry::Registry;

/// Separator used by every joined locale list.
pub const LOCALE_SEPARATOR: &str = ", ";

impl Registry {
    /// Parse a feed-style `"en-US, es-LA, ja-JP"` string into a sorted locale
    /// list such as `"en, es-419, ja"`.
    ///
    /// All whitespace is dropped before splitting, so `"en - US"` reads as
    /// `en-US`. Unknown pieces, empty ones included, become `un`.
    pub fn parse_rss_subtitles_string(&self, subs: &str) -> String {
        let compact = subs
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let locales = compact
            .split(',')
            .map(|tag| self.fix_and_find_cr_lc(Some(tag)).locale)
            .collect::<Vec<_>>();
        self.sort_tags(locales).join(LOCALE_SEPARATOR)
    }

    /// Resolve every tag, sort by locale priority, join with `", "`.
    pub fn parse_subtitles_array<S: AsRef<str>>(&self, tags: &[S]) -> String {
        let mut langs = tags
            .iter()
            .map(|tag| self.fix_and_find_cr_lc(Some(tag.as_ref())))
            .collect::<SmallVec<[_; 8]>>();
        self.sort_subtitles(&mut langs);
        langs
            .iter()
            .map(|lang| lang.locale)
            .collect::<Vec<_>>()
            .join(LOCALE_SEPARATOR)
    }
}
