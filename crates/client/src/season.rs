//! Season records emitted by catalogue discovery.

/// A single season (sub-section with its own episode listing) discovered
/// on a catalogue page.
///
/// This is a sink for the catalogue pipeline: the episode-level detail
/// component consumes it downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    /// Absolute URL of the season's episode listing
    pub url: String,
    /// Season name as declared on the page
    pub name: String,
    /// Disambiguated series name, shared by every season of the entry
    pub serie_name: String,
}
