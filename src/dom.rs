use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document of the current window, if running in a browser page.
pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

/// Create an element with an optional id and inline style.
pub fn create_element(
    document: &web::Document,
    tag: &str,
    id: Option<&str>,
    style: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if !style.is_empty() {
        el.set_attribute("style", style)
            .map_err(|e| anyhow!("style <{}>: {:?}", tag, e))?;
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

/// Inline style handle of an element, if it is an `HtmlElement`.
#[inline]
pub fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    el.dyn_ref::<web::HtmlElement>().map(|h| h.style())
}

/// Register a passive listener on `target` for the page's lifetime.
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Value of a URL query parameter on the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
