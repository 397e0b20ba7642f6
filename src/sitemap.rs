use anyhow::{Context, Result};
use log2::info;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

/// Default file the sitemap is written to
pub const DEFAULT_OUTPUT_FILE: &str = "data.xml";

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const URLSET_OPEN: &str = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";
const URLSET_CLOSE: &str = "</urlset>";

/// Render `urls` as a sitemap document, one `<url>` block per entry in set order.
pub fn render_sitemap(urls: &BTreeSet<String>) -> String {
    let mut doc = String::from(HEADER);
    doc.push_str(URLSET_OPEN);
    for url in urls {
        // writing into a String can't fail
        let _ = write!(
            doc,
            "  <url>\n    <loc>{}</loc>\n  </url>\n",
            html_escape::encode_text(url)
        );
    }
    doc.push_str(URLSET_CLOSE);
    doc
}

pub fn write_sitemap(path: &Path, urls: &BTreeSet<String>) -> Result<()> {
    std::fs::write(path, render_sitemap(urls))
        .with_context(|| format!("failed to write sitemap to {}", path.display()))?;
    info!("Sitemap with {} url(s) written to {}", urls.len(), path.display());
    Ok(())
}
