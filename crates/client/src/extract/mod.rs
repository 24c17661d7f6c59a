//! Pattern extraction over catalogue page markup.
//!
//! anime-sama title pages declare their seasons through inline script
//! calls:
//!
//! ```text
//! panneauAnime("Saison 1", "saison1/vostfr");
//! ```
//!
//! Editors disable declarations by wrapping them in `/* ... */` block
//! comments, so comment stripping must run before season matching.
//! Descriptive fields (progress, correspondence note, synopsis) sit behind
//! fixed labels in the surrounding markup; each is an independent
//! first-capture lookup where absence is a normal outcome.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid regex"));

static SEASON_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"panneauAnime\("(.+?)", *"(.+?)(?:vostfr|vf)"\);"#).expect("invalid regex"));

static ADVANCEMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Avancement.+?>(.+?)<").expect("invalid regex"));

static CORRESPONDENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Correspondance.+?>(.+?)<").expect("invalid regex"));

static SYNOPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Synopsis[\W\w]+?>(.+)<").expect("invalid regex"));

/// A season declaration captured from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDecl {
    /// Season display name
    pub name: String,
    /// Link suffix relative to the entry URL, language token stripped
    pub link: String,
}

/// Remove `/* ... */` script comments so disabled declarations never match.
pub fn strip_script_comments(markup: &str) -> String {
    SCRIPT_COMMENT.replace_all(markup, "").into_owned()
}

/// All season declarations, in document order.
///
/// Order is significant: it reflects season numbering on the page. The
/// trailing language token (`vostfr` or `vf`) is stripped from each link.
pub fn season_declarations(markup: &str) -> Vec<SeasonDecl> {
    SEASON_DECL
        .captures_iter(markup)
        .map(|caps| SeasonDecl { name: caps[1].to_string(), link: caps[2].to_string() })
        .collect()
}

/// First capture of a label-anchored pattern, or `""` when absent.
fn first_capture(pattern: &Regex, markup: &str) -> String {
    pattern.captures(markup).map(|caps| caps[1].to_string()).unwrap_or_default()
}

/// Progress status behind the "Avancement" label.
pub fn advancement(markup: &str) -> String {
    first_capture(&ADVANCEMENT, markup)
}

/// Correspondence note behind the "Correspondance" label.
pub fn correspondence(markup: &str) -> String {
    first_capture(&CORRESPONDENCE, markup)
}

/// Synopsis paragraph behind the "Synopsis" label.
pub fn synopsis(markup: &str) -> String {
    first_capture(&SYNOPSIS, markup)
}
