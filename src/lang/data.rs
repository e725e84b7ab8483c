use crate::lang::LanguageItem;

macro_rules! optional {
    ($value:literal) => {
        Some($value)
    };
    () => {
        None
    };
}

macro_rules! first_or {
    ($value:literal; $fallback:literal) => {
        $value
    };
    (; $fallback:literal) => {
        $fallback
    };
}

/// ---------------------------------------------------------------------------
///    Macro – generates every row constant and the ordered table at once
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $ident:ident {
            $(cr: $cr:literal,)?
            $(funi: $funi:literal,)?
            locale: $locale:literal,
            code: $code:literal,
            name: $name:literal,
            $(language: $language:literal,)?
            $(funi_name: $funi_name:literal,)?
            $(funi_name_legacy: $funi_name_legacy:literal,)?
        }
    ),* $(,)?) => {
        // Public row constants
        $(
            pub const $ident: LanguageItem = LanguageItem {
                cr_locale: optional!($($cr)?),
                funi_locale: optional!($($funi)?),
                locale: $locale,
                code: $code,
                name: $name,
                language: first_or!($($language)?; $name),
                funi_name: optional!($($funi_name)?),
                funi_name_legacy: optional!($($funi_name_legacy)?),
            };
        )*

        /// The catalogue in priority order. Earlier rows sort first.
        pub static LANGUAGES: &[LanguageItem] = &[$($ident),*];
    };
}

/// Returned whenever a tag cannot be resolved. Never part of [`LANGUAGES`].
pub static UNDETERMINED: LanguageItem = LanguageItem {
    cr_locale: Some("und"),
    funi_locale: None,
    locale: "un",
    code: "und",
    name: "",
    language: "",
    funi_name: None,
    funi_name_legacy: None,
};

#[inline(always)]
pub fn all_languages() -> &'static [LanguageItem] {
    LANGUAGES
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
// ---------------------------------------------------------------------------
// Row order is sort priority: subtitle lists and file names follow it.
//
// Duplicate rows are intentional:
// • ES_LA / ES_419 – `crunchy` switched from `es-LA` to `es-419`, both still seen.
// • PT / PT_BR – `pt-BR` resolves to `pt` (first row); `pt-BR` locale kept for filters.
// • AR_ME / AR_SA – two regional tags, one Arabic track.
// • ZH_MN has no `crunchy` tag, so it never shows up in search locales.
//
// JA_JP must stay last: search locales drop the final row.
// ---------------------------------------------------------------------------
define_languages! {
    EN_US { cr: "en-US", funi: "enUS", locale: "en", code: "eng", name: "English", },
    ES_LA {
        cr: "es-LA",
        funi: "esLA",
        locale: "es-419",
        code: "spa-419",
        name: "Spanish",
        language: "Latin American Spanish",
        funi_name: "Spanish (LAS)",
        funi_name_legacy: "Spanish (Latin Am)",
    },
    ES_419 {
        cr: "es-419",
        locale: "es-419",
        code: "spa-419",
        name: "Spanish",
        language: "Latin American Spanish",
    },
    ES_ES { cr: "es-ES", locale: "es-ES", code: "spa-ES", name: "Castilian", language: "European Spanish", },
    PT {
        cr: "pt-BR",
        funi: "ptBR",
        locale: "pt",
        code: "por",
        name: "Portuguese",
        language: "Brazilian Portuguese",
        funi_name: "Portuguese (Brazil)",
    },
    PT_BR {
        cr: "pt-BR",
        funi: "ptBR",
        locale: "pt-BR",
        code: "por",
        name: "Portuguese",
        language: "Brazilian Portuguese",
        funi_name: "Portuguese (Brazil)",
    },
    FR_FR { cr: "fr-FR", locale: "fr", code: "fra", name: "French", },
    DE_DE { cr: "de-DE", locale: "de", code: "deu", name: "German", },
    AR_ME { cr: "ar-ME", locale: "ar", code: "ara", name: "Arabic", },
    AR_SA { cr: "ar-SA", locale: "ar", code: "ara", name: "Arabic", },
    IT_IT { cr: "it-IT", locale: "it", code: "ita", name: "Italian", },
    RU_RU { cr: "ru-RU", locale: "ru", code: "rus", name: "Russian", },
    TR_TR { cr: "tr-TR", locale: "tr", code: "tur", name: "Turkish", },
    HI_IN { cr: "hi-IN", locale: "hi", code: "hin", name: "Hindi", },
    ZH_MN { funi: "zhMN", locale: "zh", code: "cmn", name: "Chinese (Mandarin, PRC)", },
    ZH_CN { cr: "zh-CN", locale: "zh", code: "zho", name: "Chinese (Mainland China)", },
    KO_KR { cr: "ko-KR", locale: "ko", code: "kor", name: "Korean", },
    JA_JP { cr: "ja-JP", funi: "jaJP", locale: "ja", code: "jpn", name: "Japanese", },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_name() {
        assert_eq!(EN_US.language, "English");
        assert_eq!(ZH_MN.language, "Chinese (Mandarin, PRC)");
        assert_eq!(ES_LA.language, "Latin American Spanish");
        assert!(LANGUAGES.iter().all(|l| !l.language.is_empty()));
    }

    #[test]
    fn table_order_is_stable() {
        assert_eq!(LANGUAGES.len(), 18);
        assert_eq!(LANGUAGES.first(), Some(&EN_US));
        assert_eq!(LANGUAGES.last(), Some(&JA_JP));
    }

    #[test]
    fn undetermined_is_not_enumerable() {
        assert!(!LANGUAGES.contains(&UNDETERMINED));
        assert!(LANGUAGES.iter().all(|l| l.code != "und"));
    }

    #[test]
    fn funi_only_row_has_no_crunchy_tag() {
        assert_eq!(ZH_MN.cr_locale, None);
        assert_eq!(ZH_MN.funi_locale, Some("zhMN"));
    }
}
