//! Track ordering by catalogue position.
//!
//! Every item gets the 1-based position of its locale among the unique
//! catalogue locales. Locales the catalogue does not know get the configured
//! fallback priority (50 by default). Sorting is stable, so items with equal
//! priority keep the order they came in.

use std::borrow::Cow;

use crate::{lang::LanguageItem, registry::Registry};

/// Anything that can be ordered by locale.
pub trait SortKey {
    fn sort_key(&self) -> &str;
}

impl SortKey for LanguageItem {
    #[inline(always)]
    fn sort_key(&self) -> &str {
        self.locale
    }
}

impl SortKey for str {
    #[inline(always)]
    fn sort_key(&self) -> &str {
        self
    }
}

impl SortKey for String {
    #[inline(always)]
    fn sort_key(&self) -> &str {
        self
    }
}

impl SortKey for Cow<'_, str> {
    #[inline(always)]
    fn sort_key(&self) -> &str {
        self
    }
}

impl<T: SortKey + ?Sized> SortKey for &T {
    #[inline(always)]
    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }
}

impl Registry {
    /// Priority of `locale`; unknown locales get the fallback priority.
    #[inline]
    pub fn priority(&self, locale: &str) -> usize {
        self.locale_priority(locale)
            .unwrap_or(self.config.fallback_priority)
    }

    /// Sort `data` in place by locale priority and hand it back.
    pub fn sort_subtitles<'d, T: SortKey>(&self, data: &'d mut [T]) -> &'d mut [T] {
        self.sort_subtitles_by(data, |item| item.sort_key())
    }

    /// Like [`sort_subtitles`](Self::sort_subtitles), reading the locale
    /// through `key` instead of [`SortKey`].
    pub fn sort_subtitles_by<'d, T, F>(&self, data: &'d mut [T], key: F) -> &'d mut [T]
    where
        F: Fn(&T) -> &str,
    {
        data.sort_by_key(|item| self.priority(key(item)));
        data
    }

    /// Non-mutating variant of [`sort_subtitles`](Self::sort_subtitles).
    pub fn sorted_subtitles<T: SortKey + Clone>(&self, data: &[T]) -> Vec<T> {
        let mut out = data.to_vec();
        self.sort_subtitles(&mut out);
        out
    }

    /// Sort bare locale strings.
    pub fn sort_tags<S: AsRef<str>>(&self, mut data: Vec<S>) -> Vec<S> {
        self.sort_subtitles_by(&mut data, |tag: &S| tag.as_ref());
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Track {
        lang: &'static str,
        id: u32,
    }

    impl SortKey for Track {
        fn sort_key(&self) -> &str {
            self.lang
        }
    }

    #[test]
    fn orders_by_catalogue_position() {
        let registry = Registry::global();
        let tags = registry.sort_tags(vec!["ja", "fr", "en", "es-419"]);
        assert_eq!(tags, ["en", "es-419", "fr", "ja"]);
    }

    #[test]
    fn unknown_locales_go_last_in_input_order() {
        let registry = Registry::global();
        let mut tracks = vec![
            Track { lang: "zz", id: 1 },
            Track { lang: "ja", id: 2 },
            Track { lang: "un", id: 3 },
            Track { lang: "en", id: 4 },
        ];
        registry.sort_subtitles(&mut tracks);
        let ids = tracks.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, [4, 2, 1, 3]);
    }

    #[test]
    fn equal_priorities_keep_input_order() {
        let registry = Registry::global();
        let mut tracks = vec![
            Track { lang: "de", id: 1 },
            Track { lang: "en", id: 2 },
            Track { lang: "de", id: 3 },
            Track { lang: "en", id: 4 },
        ];
        registry.sort_subtitles(&mut tracks);
        let ids = tracks.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, [2, 4, 1, 3]);
    }

    #[test]
    fn sort_by_custom_key() {
        let registry = Registry::global();
        let mut rows = vec![("b", "ko"), ("a", "pt-BR"), ("c", "pt")];
        registry.sort_subtitles_by(&mut rows, |(_, locale)| *locale);
        assert_eq!(rows, [("c", "pt"), ("a", "pt-BR"), ("b", "ko")]);
    }

    #[test]
    fn sorted_subtitles_leaves_input_alone() {
        let registry = Registry::global();
        let input = vec![Track { lang: "ja", id: 1 }, Track { lang: "en", id: 2 }];
        let sorted = registry.sorted_subtitles(&input);
        assert_eq!(input[0].id, 1);
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn fallback_priority_is_configurable() {
        let registry = Registry::builder().fallback_priority(0).build().unwrap();
        assert_eq!(registry.sort_tags(vec!["en", "xx"]), ["xx", "en"]);
        assert_eq!(registry.priority("xx"), 0);
        assert_eq!(Registry::global().priority("xx"), 50);
    }
}
