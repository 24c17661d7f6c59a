//! The catalogue entity: one title page on the index site.
//!
//! ### Lifecycle
//! - Constructed once per discovered site link; immutable except for two
//!   lazily populated caches (page body, resolved name).
//! - The page body degrades to `""` on any fetch failure and is never
//!   retried; the rest of the pipeline then simply sees no matches.
//! - The resolved name is looked up through the metadata API at most once
//!   per cache lifetime, falling back to the display name when nothing
//!   matches.
//!
//! Identity is the canonical URL alone; names and metadata never affect
//! equality.

mod taxonomy;

pub use taxonomy::{Category, Lang};

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use sama_core::{AppConfig, MatchMode, MemoCell, titles_match};

use crate::extract;
use crate::fetch::{PageFetcher, ensure_trailing_slash, site_root, url_slug};
use crate::jikan::TitleSearch;
use crate::season::Season;

/// Optional fields for catalogue construction, every one defaulted.
#[derive(Debug, Clone)]
pub struct CatalogueOptions {
    /// Explicit display name; defaults to the URL slug.
    pub name: Option<String>,
    /// Alternate titles in priority order; the first one overrides the
    /// display name.
    pub alternative_names: Vec<String>,
    /// Genre list from the index page.
    pub genres: Vec<String>,
    /// Category tags; may be empty or carry several tags.
    pub categories: HashSet<Category>,
    /// Language tags.
    pub languages: HashSet<Lang>,
    /// Cover image reference.
    pub image_url: String,
    /// Expiry for the cached page body and resolved name; `None` caches
    /// forever.
    pub cache_ttl: Option<Duration>,
    /// Title matching policy for metadata resolution.
    pub match_mode: MatchMode,
    /// Result cap per metadata query.
    pub lookup_limit: u8,
}

impl Default for CatalogueOptions {
    fn default() -> Self {
        Self {
            name: None,
            alternative_names: Vec::new(),
            genres: Vec::new(),
            categories: HashSet::new(),
            languages: HashSet::new(),
            image_url: String::new(),
            cache_ttl: None,
            match_mode: MatchMode::default(),
            lookup_limit: 3,
        }
    }
}

impl CatalogueOptions {
    /// Options seeded from the application config (cache policy, matching
    /// policy, lookup cap).
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            cache_ttl: config.page_ttl(),
            match_mode: config.match_mode(),
            lookup_limit: config.lookup_limit,
            ..Default::default()
        }
    }
}

/// A single catalogue entry (title page) on the index site.
pub struct Catalogue {
    url: String,
    site_url: String,
    name: String,
    raw_name: String,
    alternative_names: Vec<String>,
    genres: Vec<String>,
    categories: HashSet<Category>,
    languages: HashSet<Lang>,
    image_url: String,
    match_mode: MatchMode,
    lookup_limit: u8,
    fetcher: Arc<dyn PageFetcher>,
    lookup: Arc<dyn TitleSearch>,
    page: MemoCell<String>,
    name_with_year: MemoCell<String>,
}

impl Catalogue {
    /// Build an entry for `url`.
    ///
    /// The URL is normalized to end with a separator. The display name is,
    /// in priority order: the first alternate name, the explicit name, the
    /// URL slug. The raw name (explicit name or slug) is retained even
    /// when an alternate name overrides the display name.
    pub fn new(
        url: &str,
        options: CatalogueOptions,
        fetcher: Arc<dyn PageFetcher>,
        lookup: Arc<dyn TitleSearch>,
    ) -> Self {
        let url = ensure_trailing_slash(url.trim());
        let site_url = site_root(&url);

        let raw_name = options
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| url_slug(&url));
        let name = options.alternative_names.first().cloned().unwrap_or_else(|| raw_name.clone());

        Self {
            url,
            site_url,
            name,
            raw_name,
            alternative_names: options.alternative_names,
            genres: options.genres,
            categories: options.categories,
            languages: options.languages,
            image_url: options.image_url,
            match_mode: options.match_mode,
            lookup_limit: options.lookup_limit,
            fetcher,
            lookup,
            page: MemoCell::with_policy(options.cache_ttl),
            name_with_year: MemoCell::with_policy(options.cache_ttl),
        }
    }

    /// Canonical URL; always ends with a separator.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Root URL of the hosting site.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original name before any alternate-name override.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Alternate titles in priority order.
    pub fn alternative_names(&self) -> &[String] {
        &self.alternative_names
    }

    /// Genre list from the index page.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Category tags.
    pub fn categories(&self) -> &HashSet<Category> {
        &self.categories
    }

    /// Language tags.
    pub fn languages(&self) -> &HashSet<Lang> {
        &self.languages
    }

    /// Cover image reference.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// The raw page body, fetched at most once per cache lifetime.
    ///
    /// Any fetch failure caches `""`; later calls never retry.
    pub async fn page(&self) -> String {
        self.page
            .get_or_init(|| async {
                match self.fetcher.fetch(&self.url).await {
                    Ok(body) => body,
                    Err(err) => {
                        tracing::debug!("page fetch failed for {}: {}", self.url, err);
                        String::new()
                    }
                }
            })
            .await
    }

    /// Discovered seasons, in document order.
    ///
    /// Script comments are stripped before matching so disabled
    /// declarations never produce phantom seasons. Each season carries the
    /// disambiguated series name.
    pub async fn seasons(&self) -> Vec<Season> {
        let page = extract::strip_script_comments(&self.page().await);
        let declarations = extract::season_declarations(&page);

        if declarations.is_empty() {
            return Vec::new();
        }

        let serie_name = self.name_with_year().await;

        declarations
            .into_iter()
            .map(|decl| Season {
                url: format!("{}{}", self.url, decl.link),
                name: decl.name,
                serie_name: serie_name.clone(),
            })
            .collect()
    }

    /// Progress status ("Avancement"), or `""` when the page lacks it.
    pub async fn advancement(&self) -> String {
        extract::advancement(&self.page().await)
    }

    /// Correspondence note ("Correspondance"), or `""` when absent.
    pub async fn correspondence(&self) -> String {
        extract::correspondence(&self.page().await)
    }

    /// Synopsis paragraph, or `""` when absent.
    pub async fn synopsis(&self) -> String {
        extract::synopsis(&self.page().await)
    }

    /// Display name disambiguated with its release year.
    ///
    /// Resolution runs at most once per cache lifetime; the fallback (the
    /// unmodified display name) is cached too, so repeated calls are free.
    pub async fn name_with_year(&self) -> String {
        self.name_with_year.get_or_init(|| self.resolve_name_with_year()).await
    }

    /// Walk candidate names in order and take the first metadata record
    /// whose title variants match. Individual query failures are logged
    /// and skipped; they never abort resolution.
    async fn resolve_name_with_year(&self) -> String {
        let mut candidates = vec![self.name.as_str()];
        candidates.extend(self.alternative_names.iter().map(String::as_str));

        for candidate in candidates {
            let records = match self.lookup.search(candidate, self.lookup_limit).await {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!("title lookup failed for {:?}: {}; trying next candidate", candidate, err);
                    continue;
                }
            };

            for record in records {
                if record.title_variants().any(|variant| titles_match(candidate, variant, self.match_mode)) {
                    let resolved = match record.release_year() {
                        Some(year) => format!("{} ({})", record.title, year),
                        None => record.title.clone(),
                    };
                    tracing::debug!("resolved {:?} as {:?}", self.name, resolved);
                    return resolved;
                }
            }
        }

        tracing::debug!("no metadata match for {:?}; keeping the original name", self.name);
        self.name.clone()
    }

    /// Whether the entry carries the anime category tag.
    pub fn is_anime(&self) -> bool {
        self.categories.contains(&Category::Anime)
    }

    /// Whether the entry carries the scans (manga) category tag.
    pub fn is_manga(&self) -> bool {
        self.categories.contains(&Category::Scans)
    }

    /// Whether the entry carries the film category tag.
    pub fn is_film(&self) -> bool {
        self.categories.contains(&Category::Film)
    }

    /// Whether the entry carries the miscellaneous category tag.
    pub fn is_other(&self) -> bool {
        self.categories.contains(&Category::Autres)
    }

    /// Display line: name, de-emphasized dash-joined alternates, and a
    /// flag for every language except the original-subtitled one.
    pub fn fancy_name(&self) -> String {
        let alternates: String = self.alternative_names.iter().map(|alt| format!(" - {alt}")).collect();

        let mut languages: Vec<Lang> = self
            .languages
            .iter()
            .copied()
            .filter(|lang| *lang != Lang::Vostfr)
            .collect();
        languages.sort();
        let flags: Vec<&str> = languages.into_iter().map(Lang::flag).collect();

        format!("{}[bright_black]{} {}", self.name, alternates, flags.join(" "))
    }
}

impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fancy_name())
    }
}

impl fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalogue").field("url", &self.url).field("name", &self.name).finish()
    }
}

impl PartialEq for Catalogue {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Catalogue {}

impl Hash for Catalogue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}
