pub mod data;

pub use data::{LANGUAGES, UNDETERMINED, all_languages};

/// One catalogue row: how a single language is spelled by each upstream
/// service and how it is named on disk.
///
/// `language` is never optional. Rows that do not spell out a dialect name
/// inherit `name` when the table is expanded by `define_languages!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageItem {
    /// Tag used by the `crunchy` service (`en-US`).
    pub cr_locale: Option<&'static str>,
    /// Tag used by the `funi` service (`enUS`).
    pub funi_locale: Option<&'static str>,
    /// Internal canonical locale (`en`, `es-419`).
    pub locale: &'static str,
    /// Short language code used in file names (`eng`, `spa-419`).
    pub code: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    pub funi_name: Option<&'static str>,
    pub funi_name_legacy: Option<&'static str>,
}

impl LanguageItem {
    #[inline(always)]
    pub const fn locale(&self) -> &'static str {
        self.locale
    }

    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn language(&self) -> &'static str {
        self.language
    }

    /// `true` for the fallback entry returned when nothing matched.
    #[inline]
    pub fn is_undetermined(&self) -> bool {
        self.code == UNDETERMINED.code && self.locale == UNDETERMINED.locale
    }

    /// Does `name` match any of the display names this row is known under?
    pub fn answers_to(&self, name: &str) -> bool {
        self.funi_name == Some(name) || self.funi_name_legacy == Some(name) || self.name == name
    }
}
