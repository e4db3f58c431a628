//! Structural element paths used to point at a defect in a document.

use scraper::ElementRef;

/// Compute a stable path identifying `element` within its document.
///
/// Elements with an `id` get an id shortcut (`//*[@id="main"]`). Everything
/// else, including ids that cannot be quoted, gets a positional path from the
/// root, e.g. `/html/body/div[2]/span`, where the index counts preceding
/// element siblings with the same tag and is left out for the first one. Elements that are not attached to a full
/// document produce a path over whatever ancestors they have.
pub fn locate(element: ElementRef<'_>) -> String {
    if let Some(shortcut) = element.value().id().and_then(id_shortcut) {
        return shortcut;
    }

    let mut segments = Vec::new();
    let mut current = Some(element);

    while let Some(el) = current {
        segments.push(segment(el));
        current = el.parent().and_then(ElementRef::wrap);
    }

    segments.reverse();
    format!("/{}", segments.join("/"))
}

/// XPath string literals have no escapes: quote with whichever quote the id
/// lacks, and give up on ids holding both.
fn id_shortcut(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else if !id.contains('"') {
        Some(format!("//*[@id=\"{}\"]", id))
    } else if !id.contains('\'') {
        Some(format!("//*[@id='{}']", id))
    } else {
        None
    }
}

fn segment(element: ElementRef<'_>) -> String {
    let tag = element.value().name();
    let index = element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == tag)
        .count()
        + 1;

    if index == 1 {
        tag.to_string()
    } else {
        format!("{}[{}]", tag, index)
    }
}
