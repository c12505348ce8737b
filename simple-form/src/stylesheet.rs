//! Stylesheet presence check and injection.

use simple_form_dom::{Document, DomError, NodeId};
use simple_form_types::StylesheetOptions;

/// File names that count as the framework stylesheet being loaded.
pub const KNOWN_STYLESHEETS: [&str; 2] = ["bootstrap.css", "bootstrap.min.css"];

/// Result of [`ensure_stylesheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetStatus {
    /// A matching stylesheet was already on the page.
    AlreadyLoaded,
    /// A new `link` element was appended to `head`.
    Injected(NodeId),
}

/// Check if any stylesheet on the page references a known file name.
pub fn is_stylesheet_loaded(doc: &Document) -> bool {
    doc.stylesheet_hrefs()
        .iter()
        .any(|href| KNOWN_STYLESHEETS.iter().any(|name| href.contains(name)))
}

/// Inject the stylesheet link into `head` unless one is already loaded.
pub fn ensure_stylesheet(
    doc: &mut Document,
    options: &StylesheetOptions,
) -> Result<StylesheetStatus, DomError> {
    if is_stylesheet_loaded(doc) {
        tracing::debug!("stylesheet already loaded");
        return Ok(StylesheetStatus::AlreadyLoaded);
    }

    let link = doc.create_element("link");
    doc.set_attribute(link, "rel", "stylesheet")?;
    let attributes = [
        ("href", &options.href),
        ("integrity", &options.integrity),
        ("crossorigin", &options.crossorigin),
    ];
    for (name, value) in attributes {
        if let Some(value) = value {
            doc.set_attribute(link, name, value)?;
        }
    }
    doc.append_child(doc.head(), link)?;

    tracing::debug!(href = ?options.href, "injected stylesheet");
    Ok(StylesheetStatus::Injected(link))
}
