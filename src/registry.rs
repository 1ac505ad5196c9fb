//! The fixed catalog of Uruguayan news sources.
//!
//! Each entry names a publisher, the URL to fetch, and the acquisition
//! strategy: structured feed parsing ([`Strategy::Feed`]) or raw markup
//! extraction ([`Strategy::Markup`], which additionally carries a CSS
//! selector identifying headline anchors).
//!
//! The registry is defined once at configuration time and never mutated
//! during a run. Iteration order here fixes the merge order of the final
//! result, so entries are listed in presentation priority.

use once_cell::sync::Lazy;

/// Acquisition strategy for one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Parse the endpoint as an RSS/Atom feed.
    Feed,
    /// Fetch the endpoint as HTML and extract headline anchors by selector.
    Markup,
}

/// One registry entry. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    /// Display name, unique within the registry by convention. Used for
    /// attribution and logging.
    pub name: &'static str,
    /// URL to fetch. For markup sources this is also the base against
    /// which relative story links are resolved.
    pub endpoint: &'static str,
    /// How to acquire headlines from this source.
    pub strategy: Strategy,
    /// CSS selector list matching headline anchors. Present iff
    /// `strategy` is [`Strategy::Markup`].
    pub selector: Option<&'static str>,
}

impl Source {
    const fn feed(name: &'static str, endpoint: &'static str) -> Self {
        Source {
            name,
            endpoint,
            strategy: Strategy::Feed,
            selector: None,
        }
    }

    const fn markup(name: &'static str, endpoint: &'static str, selector: &'static str) -> Self {
        Source {
            name,
            endpoint,
            strategy: Strategy::Markup,
            selector: Some(selector),
        }
    }
}

/// Maximum number of items one source may contribute per run.
pub const PER_SOURCE_CAP: usize = 3;

/// Maximum number of items in the consolidated result.
pub const TOTAL_CAP: usize = 10;

static SOURCES: Lazy<Vec<Source>> = Lazy::new(|| {
    vec![
        Source::feed("El País", "https://www.elpais.com.uy/rss/"),
        Source::feed(
            "El Observador",
            "https://www.elobservador.com.uy/rss/homepage.xml",
        ),
        Source::feed("La Diaria", "https://ladiaria.com.uy/feed/"),
        Source::feed("La Red 21", "https://www.lr21.com.uy/feed"),
        Source::feed("República", "https://www.republica.com.uy/feed"),
        Source::feed("Búsqueda", "https://www.busqueda.com.uy/rss"),
        Source::markup(
            "Montevideo Portal",
            "https://www.montevideo.com.uy/",
            "article h2 a, .title a",
        ),
        Source::markup(
            "Subrayado",
            "https://www.subrayado.com.uy/",
            "article h2 a, .nota-title a",
        ),
    ]
});

/// The configured source registry, in merge order.
pub fn sources() -> &'static [Source] {
    &SOURCES
}
