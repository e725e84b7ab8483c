//! The two upstream services and their own spellings of a language.

use std::fmt;

use phf::{Map, phf_map};
use tracing::trace;

use crate::{
    lang::{LanguageItem, UNDETERMINED},
    registry::Registry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Tags like `en-US`, stored in `cr_locale`.
    Crunchy,
    /// Tags like `enUS`, stored in `funi_locale`.
    Funi,
}

static SERVICES: Map<&'static str, Service> = phf_map! {
    "crunchy" => Service::Crunchy,
    "funi" => Service::Funi,
};

impl Service {
    pub fn from_id(id: &str) -> Option<Self> {
        SERVICES.get(id).copied()
    }

    pub const fn id(self) -> &'static str {
        match self {
            Service::Crunchy => "crunchy",
            Service::Funi => "funi",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Service::Crunchy => "Crunchyroll",
            Service::Funi => "Funimation",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl Registry {
    /// Exact match on the `funi` tag. The first row wins.
    pub fn find_funi_lang(&self, funi_locale: &str) -> &'static LanguageItem {
        self.languages()
            .iter()
            .find(|l| l.funi_locale == Some(funi_locale))
            .unwrap_or(&UNDETERMINED)
    }

    /// Match `funi` display names, current or legacy, falling back to the
    /// plain name (`"Spanish (Latin Am)"`, `"Portuguese (Brazil)"`, `"German"`).
    pub fn find_by_funi_name(&self, name: &str) -> &'static LanguageItem {
        self.languages()
            .iter()
            .find(|l| l.answers_to(name))
            .unwrap_or_else(|| {
                trace!(name, "no language for funi name, using undetermined");
                &UNDETERMINED
            })
    }

    /// Resolve a tag the way `service` spells it.
    pub fn find_for_service(&self, service: Service, tag: &str) -> &'static LanguageItem {
        let lang = self.fix_and_find_cr_lc(Some(tag));
        match service {
            Service::Funi if lang.is_undetermined() => self.find_funi_lang(tag),
            _ => lang,
        }
    }
}
