use std::fmt;

use super::links::Link;

/// `scheme://host[:port]` prefix of the seed URL. Marks the same-site boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Truncates `seed` right before its third `/`.
    /// A seed with fewer than three slashes is taken whole.
    pub fn from_seed(seed: &str) -> Self {
        match seed.match_indices('/').nth(2) {
            Some((idx, _)) => Self(seed[..idx].to_string()),
            None => Self(seed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rewrites `href` to an absolute same-site URL, or rejects it.
    ///
    /// Root-relative hrefs get the origin prepended, hrefs already starting with
    /// the origin pass through untouched and everything else (other hosts,
    /// fragments, `mailto:`, empty) is dropped.
    pub fn resolve(&self, href: &str) -> Option<String> {
        if href.starts_with('/') {
            Some(format!("{}{}", self.0, href))
        } else if href.starts_with(self.as_str()) {
            Some(href.to_string())
        } else {
            None
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted URLs of `links` in input order. Duplicates are kept.
pub fn normalize(origin: &Origin, links: &[Link]) -> Vec<String> {
    links.iter().filter_map(|link| origin.resolve(&link.href)).collect()
}
