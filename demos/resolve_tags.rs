use std::error::Error;

use langtrack::{Registry, Service, subs_file};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=langtrack=trace shows every fallback to the undetermined entry.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::global();

    // ────────────────────────────────────────────────────────────────
    // Feed-style subtitle strings
    // ────────────────────────────────────────────────────────────────
    println!(
        "rss     : {}",
        registry.parse_rss_subtitles_string("ja-JP, en-US, es-LA, xx-XX, de-DE")
    );
    // → en, es-419, de, ja, un

    // ────────────────────────────────────────────────────────────────
    // The same tracks as each service spells them
    // ────────────────────────────────────────────────────────────────
    for (service, tag) in [(Service::Crunchy, "pt-BR"), (Service::Funi, "ptBR"), (Service::Funi, "zhMN")] {
        let lang = registry.find_for_service(service, tag);
        println!("{service:<11}: {tag:<6} → {} ({})", lang.locale, lang.language);
    }

    // ────────────────────────────────────────────────────────────────
    // Subtitle file names in catalogue order
    // ────────────────────────────────────────────────────────────────
    let mut tracks = ["ja-JP", "enUS", "fr-FR"]
        .map(|tag| registry.fix_and_find_cr_lc(Some(tag)));
    registry.sort_subtitles(&mut tracks);
    for (i, lang) in tracks.iter().enumerate() {
        println!("file    : {}", subs_file("Show_S01E01", &i.to_string(), lang, false, "CC")?);
    }

    // ────────────────────────────────────────────────────────────────
    // Dub suffixes in titles
    // ────────────────────────────────────────────────────────────────
    for title in ["My Show (English Dub)", "My Show (French VO)", "My Show"] {
        match registry.dub_language_in(title) {
            Some(dub) => println!("dub     : {title} → {} [{}]", dub.name, dub.code),
            None => println!("dub     : {title} → original audio"),
        }
    }

    Ok(())
}
