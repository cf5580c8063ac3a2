// dom.rs
use scraper::{ElementRef, Selector};
use tracing::warn;

pub fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(css, error = %e, "invalid selector");
            None
        }
    }
}

pub fn select_first<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    let found = root.select(&selector).next();
    found
}

/// First element matching `css` after `start` in document order, starting
/// with `start`'s own descendants.
pub fn find_next<'a>(start: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    let start_node = *start;
    let top = start_node.ancestors().last().unwrap_or(start_node);

    let found = top
        .descendants()
        .skip_while(|node| node.id() != start_node.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| selector.matches(element));
    found
}

pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
