//! Category and language tags for catalogue entries.
//!
//! The source site's taxonomy drifts: "Animes" instead of "Anime" (seen on
//! Cyberpunk: Edgerunners), "Autre" instead of "Autres" (Hazbin Hotel),
//! and "Scans" occasionally filed in the language section (Watamote).
//! Parsing is tolerant and the category set stays open, so drift never
//! fails an entry.

use serde::{Deserialize, Serialize};

/// Content category of a catalogue entry.
///
/// Entries may carry zero, one, or several tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Anime,
    Scans,
    Film,
    Autres,
    /// Tag outside the known taxonomy; preserved as-is.
    Other(String),
}

impl Category {
    /// Parse a raw tag, absorbing the known singular/plural drift.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "anime" | "animes" => Category::Anime,
            "scans" | "scan" => Category::Scans,
            "film" | "films" => Category::Film,
            "autres" | "autre" => Category::Autres,
            _ => Category::Other(raw.trim().to_string()),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Language tag of a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lang {
    /// Original audio with French subtitles
    Vostfr,
    /// French dub
    Vf,
    /// English dub
    Va,
    /// Korean
    Vkr,
    /// Chinese
    Vcn,
    /// Quebec French dub
    Vqc,
}

impl Lang {
    /// Short visual marker (flag) for display.
    pub fn flag(self) -> &'static str {
        match self {
            Lang::Vostfr => "\u{1F1EF}\u{1F1F5}",
            Lang::Vf => "\u{1F1EB}\u{1F1F7}",
            Lang::Va => "\u{1F1EC}\u{1F1E7}",
            Lang::Vkr => "\u{1F1F0}\u{1F1F7}",
            Lang::Vcn => "\u{1F1E8}\u{1F1F3}",
            Lang::Vqc => "\u{1F1E8}\u{1F1E6}",
        }
    }

    /// Parse a raw language tag, case-insensitive.
    ///
    /// Unknown tags (including stray category names filed in the language
    /// section) yield `None` rather than failing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "VOSTFR" => Some(Lang::Vostfr),
            "VF" => Some(Lang::Vf),
            "VA" => Some(Lang::Va),
            "VKR" => Some(Lang::Vkr),
            "VCN" => Some(Lang::Vcn),
            "VQC" => Some(Lang::Vqc),
            _ => None,
        }
    }
}
