//! Tag normalization: raw service tags to catalogue rows.
//!
//! `crunchy` speaks `en-US`, `funi` speaks `enUS`, users type `en-us`. All of
//! them are reshaped to `xx-YY` before the lookup, and anything that still
//! does not resolve falls back to [`UNDETERMINED`].

use std::borrow::Cow;

use tracing::trace;

use crate::{
    lang::{LanguageItem, UNDETERMINED},
    registry::Registry,
};

/// Tag assumed when the caller has no tag at all.
pub const UNDETERMINED_TAG: &str = "und";

impl Registry {
    /// Reshape a two-letter language/region tag to `xx-YY` and map it onto
    /// its `crunchy` spelling when the catalogue knows it.
    ///
    /// Tags of any other shape (`es-419`, `eng`, `""`) come back untouched.
    /// `None` is treated as `und`.
    pub fn fix_language_tag<'a>(&self, tag: Option<&'a str>) -> Cow<'a, str> {
        let tag = tag.unwrap_or(UNDETERMINED_TAG);
        let Some(caps) = self.tag_shape.captures(tag) else {
            return Cow::Borrowed(tag);
        };
        let reshaped = format!(
            "{}-{}",
            caps[1].to_ascii_lowercase(),
            caps[2].to_ascii_uppercase()
        );

        let lang = self.find_lang(&reshaped);
        match lang.cr_locale {
            Some(cr_locale) if !lang.is_undetermined() => {
                trace!(tag, cr_locale, "language tag reshaped");
                Cow::Borrowed(cr_locale)
            }
            _ => Cow::Owned(reshaped),
        }
    }

    /// Exact match on the `crunchy` tag. The first row wins.
    pub fn find_lang(&self, cr_locale: &str) -> &'static LanguageItem {
        match self
            .languages()
            .iter()
            .find(|l| l.cr_locale == Some(cr_locale))
        {
            Some(lang) => lang,
            None => {
                trace!(tag = cr_locale, "no language for tag, using undetermined");
                &UNDETERMINED
            }
        }
    }

    /// [`fix_language_tag`](Self::fix_language_tag) followed by
    /// [`find_lang`](Self::find_lang). Entry point for every parser.
    pub fn fix_and_find_cr_lc(&self, cr_locale: Option<&str>) -> &'static LanguageItem {
        let fixed = self.fix_language_tag(cr_locale);
        self.find_lang(&fixed)
    }
}
