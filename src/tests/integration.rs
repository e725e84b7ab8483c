#[cfg(test)]
mod integration_tests {

    use crate::{
        DubMarker, LanguageItem, Registry, Service, SortKey,
        lang::data::{EN_US, FR_FR, JA_JP},
        subs_file,
    };

    #[derive(Debug, Clone)]
    struct SubtitleTrack {
        lang: &'static LanguageItem,
        closed_caption: bool,
    }

    impl SortKey for SubtitleTrack {
        fn sort_key(&self) -> &str {
            self.lang.locale
        }
    }

    #[test]
    fn episode_subtitle_file_names() {
        let registry = Registry::global();
        let raw = [("ja-JP", false), ("enUS", true), ("xx-XX", false), ("es-la", false)];

        let mut tracks = raw
            .iter()
            .map(|(tag, cc)| SubtitleTrack {
                lang: registry.fix_and_find_cr_lc(Some(*tag)),
                closed_caption: *cc,
            })
            .collect::<Vec<_>>();
        registry.sort_subtitles(&mut tracks);

        let names = tracks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                subs_file("Show_S01E02", &i.to_string(), t.lang, t.closed_caption, "CC").unwrap()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            [
                "Show_S01E02.01.eng.English.CC.ass",
                "Show_S01E02.02.spa-419.Latin American Spanish.ass",
                "Show_S01E02.03.jpn.Japanese.ass",
                "Show_S01E02.04.und..ass",
            ]
        );
    }

    #[test]
    fn dub_title_to_track_language() {
        let registry = Registry::global();
        let found = registry
            .dub_language_in("Attack on Something (Castilian Dub)")
            .unwrap();
        assert_eq!(found.code, "spa-ES");
        assert_eq!(found.marker, Some(DubMarker::Dub));
        assert_eq!(registry.lang_code_to_name(found.code), Some("Castilian"));
        assert!(registry.dub_language_in("Attack on Something").is_none());
    }

    #[test]
    fn same_track_list_from_both_services() {
        let registry = Registry::global();
        let crunchy = ["ja-JP", "pt-BR", "en-US"]
            .iter()
            .map(|t| registry.find_for_service(Service::Crunchy, t).locale)
            .collect::<Vec<_>>();
        let funi = ["jaJP", "ptBR", "enUS"]
            .iter()
            .map(|t| registry.find_for_service(Service::Funi, t).locale)
            .collect::<Vec<_>>();
        assert_eq!(registry.sort_tags(crunchy.clone()), registry.sort_tags(funi));
        assert_eq!(registry.sort_tags(crunchy), ["en", "pt", "ja"]);
    }

    #[test]
    fn subtitle_filter_covers_every_resolved_locale() {
        let registry = Registry::global();
        let filter = registry.subtitle_languages_filter();
        for tag in registry.search_locales().iter().skip(1) {
            let locale = registry.fix_and_find_cr_lc(Some(*tag)).locale;
            assert!(filter.contains(&locale), "{tag} -> {locale}");
        }
    }

    #[test]
    fn custom_catalogue_reorders_output() {
        static REVERSED: &[LanguageItem] = &[JA_JP, FR_FR, EN_US];
        let registry = Registry::builder().languages(REVERSED).build().unwrap();
        assert_eq!(
            registry.parse_subtitles_array(&["en-US", "fr-FR", "ja-JP", "de-DE"]),
            "ja, fr, en, un"
        );
        assert_eq!(registry.search_locales(), ["", "ja-JP", "fr-FR"]);
        assert!(registry.dub_regex().is_match("Title (Japanese)"));
        assert!(!registry.dub_regex().is_match("Title (German)"));
    }
}
