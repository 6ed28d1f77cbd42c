use globe_core::Grid;
use std::fmt::Write;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))
}

/// Decorative output: hide from screen readers and clear stale content.
pub fn prepare_host(el: &web::Element) {
    let _ = el.set_attribute("aria-hidden", "true");
    el.set_text_content(None);
}

/// Sink that writes each frame into `el.textContent`, reusing one string.
pub fn text_sink(el: web::Element) -> impl FnMut(&Grid) + 'static {
    let mut text = String::new();
    move |grid: &Grid| {
        text.clear();
        let _ = write!(text, "{grid}");
        el.set_text_content(Some(&text));
    }
}
