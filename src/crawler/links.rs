use scraper::{ElementRef, Html};

use super::error::ParseError;

/// Anchor found in a page: raw `href` value and its visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Extracts every `<a>` element of `markup` in document order.
///
/// The scan is a pre-order walk over an explicit stack so deeply nested markup
/// can't blow the call stack. Once an anchor is found its subtree is not scanned
/// for further anchors. Comments are separate nodes and never match.
///
/// Bytes that aren't UTF-8 (Latin-1 pages and the like) are decoded lossily.
/// Only input containing a NUL byte is refused as binary.
pub fn extract_links(markup: &[u8]) -> Result<Vec<Link>, ParseError> {
    if let Some(offset) = markup.iter().position(|&b| b == 0) {
        return Err(ParseError::Binary { offset });
    }
    let html = String::from_utf8_lossy(markup);
    let document = Html::parse_document(&html);

    let mut links = Vec::new();
    let mut stack = vec![document.tree.root()];
    while let Some(node) = stack.pop() {
        if let Some(anchor) = ElementRef::wrap(node).filter(|el| el.value().name() == "a") {
            links.push(build_link(anchor));
            continue;
        }
        // reversed so the first child is popped first
        stack.extend(node.children().rev());
    }

    Ok(links)
}

fn build_link(anchor: ElementRef<'_>) -> Link {
    let href = anchor.value().attr("href").unwrap_or_default().to_string();
    let text = collapse_whitespace(&anchor.text().collect::<String>());
    Link { href, text }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, text: &str) -> Link {
        Link { href: href.to_string(), text: text.to_string() }
    }

    #[test]
    fn test_single_link() -> Result<(), Box<dyn std::error::Error>> {
        let html = r#"
        <html>
        <body>
          <h1>Hello!</h1>
          <a href="/other-page">A link to another page</a>
        </body>
        </html>"#;
        let links = extract_links(html.as_bytes())?;
        assert_eq!(links, vec![link("/other-page", "A link to another page")]);
        Ok(())
    }

    #[test]
    fn test_links_keep_document_order() -> Result<(), Box<dyn std::error::Error>> {
        let html = r#"
        <div>
          <p><a href="https://social.example.net/someone">Find me <strong>online</strong></a></p>
          <footer>
            <a href="https://code.example.org/project">
              The project lives <em>here</em>!
            </a>
          </footer>
        </div>"#;
        let links = extract_links(html.as_bytes())?;
        assert_eq!(links, vec![
            link("https://social.example.net/someone", "Find me online"),
            link("https://code.example.org/project", "The project lives here!"),
        ]);
        Ok(())
    }

    #[test]
    fn test_commented_anchor_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let html = r##"
        <form>
          <a href="#">Login </a>
          <!-- <a href="/forgot">Forgot password?</a> -->
          <a href="/lost">Lost? <!-- really --> Need help?</a>
        </form>
        <!-- <a href="/hidden">hidden</a> -->
        <a href="https://social.example.net/team">@team</a>"##;
        let links = extract_links(html.as_bytes())?;
        assert_eq!(links, vec![
            link("#", "Login"),
            link("/lost", "Lost? Need help?"),
            link("https://social.example.net/team", "@team"),
        ]);
        Ok(())
    }

    #[test]
    fn test_text_collapsed_across_inline_elements() -> Result<(), Box<dyn std::error::Error>> {
        let html = "<a href=\"/login\"><span>  Login</span>\n  <b>now  </b></a>";
        let links = extract_links(html.as_bytes())?;
        assert_eq!(links, vec![link("/login", "Login now")]);
        Ok(())
    }

    #[test]
    fn test_missing_href_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let links = extract_links(br#"<a name="top">Top</a>"#)?;
        assert_eq!(links, vec![link("", "Top")]);
        Ok(())
    }

    #[test]
    fn test_no_anchors_is_empty_not_error() -> Result<(), Box<dyn std::error::Error>> {
        assert!(extract_links(b"<html><body><p>nothing here</p></body></html>")?.is_empty());
        assert!(extract_links(b"")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_markup_recovers() -> Result<(), Box<dyn std::error::Error>> {
        let html = r#"<div><p><a href="/one">One</a><p><a href="/two">Two</a></div></span><a href="/three">Three"#;
        let hrefs: Vec<String> = extract_links(html.as_bytes())?.into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/one", "/two", "/three"]);
        Ok(())
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let depth = 5_000;
        let html = format!("{}<a href=\"/deep\">deep</a>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let links = extract_links(html.as_bytes())?;
        assert_eq!(links, vec![link("/deep", "deep")]);
        Ok(())
    }

    #[test]
    fn test_latin1_page_still_yields_links() -> Result<(), Box<dyn std::error::Error>> {
        let html = b"<p>Caf\xe9</p><a href=\"/c\">Caf\xe9 menu</a><a href=\"/d\">D</a>";
        let links = extract_links(html)?;
        assert_eq!(links, vec![link("/c", "Caf\u{FFFD} menu"), link("/d", "D")]);
        Ok(())
    }

    #[test]
    fn test_binary_input_is_parse_error() {
        let result = extract_links(&[0xff, 0xfe, 0x00, 0xc3]);
        assert!(matches!(result, Err(ParseError::Binary { offset: 2 })));
    }
}
