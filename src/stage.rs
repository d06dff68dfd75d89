use crate::constants::*;
use crate::core::{
    indicator_bounce, indicator_offset_px, map_card, stack_offset_px, stack_z_index, KeyframeTable,
    Theme,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardElement {
    root: web::Element,
    style: web::CssStyleDeclaration,
}

/// DOM for the whole page plus the handles the frame loop writes to.
pub struct Stage {
    pub container: web::Element,
    cards: Vec<CardElement>,
    indicator: Option<web::CssStyleDeclaration>,
    bounce: KeyframeTable,
    theme: Theme,
}

impl Stage {
    pub fn build(
        document: &web::Document,
        root: &web::Element,
        theme: Theme,
        images: &[&str],
    ) -> anyhow::Result<Stage> {
        let palette = theme.palette;

        let main = dom::create_element(
            document,
            "main",
            None,
            &format!("min-height:100vh;margin:0;background:{};", palette.page_background),
        )?;
        dom::append(root, &main)?;

        let container = dom::create_element(
            document,
            "div",
            Some(SCROLL_CONTAINER_ID),
            &format!("position:relative;height:{}vh;", CONTAINER_VIEWPORT_MULTIPLE * 100),
        )?;
        dom::append(&main, &container)?;

        let sticky = dom::create_element(
            document,
            "div",
            None,
            "position:sticky;top:0;height:100vh;display:flex;align-items:center;\
             justify-content:center;overflow:hidden;",
        )?;
        dom::append(&container, &sticky)?;

        let backdrop = dom::create_element(
            document,
            "div",
            None,
            &format!("position:absolute;inset:0;background:{};", palette.stage_background),
        )?;
        dom::append(&sticky, &backdrop)?;

        let hero = dom::create_element(
            document,
            "div",
            None,
            "position:absolute;top:80px;left:0;right:0;text-align:center;z-index:20;",
        )?;
        let title = dom::create_element(
            document,
            "h1",
            None,
            &format!(
                "margin:0;font:700 60px/1 system-ui,sans-serif;color:{};",
                palette.title_color
            ),
        )?;
        title.set_text_content(Some(HERO_TITLE));
        dom::append(&hero, &title)?;
        dom::append(&sticky, &hero)?;

        let frame = dom::create_element(
            document,
            "div",
            None,
            &format!(
                "position:relative;width:100%;max-width:{}px;margin:0 auto;padding:0 16px;\
                 box-sizing:border-box;",
                STAGE_MAX_WIDTH_PX
            ),
        )?;
        let perspective = dom::create_element(
            document,
            "div",
            None,
            &format!(
                "position:relative;height:{}px;perspective:{}px;",
                STAGE_HEIGHT_PX, PERSPECTIVE_PX
            ),
        )?;
        let deck = dom::create_element(
            document,
            "div",
            Some(DECK_ID),
            "position:relative;width:100%;height:100%;transform-style:preserve-3d;",
        )?;
        dom::append(&sticky, &frame)?;
        dom::append(&frame, &perspective)?;
        dom::append(&perspective, &deck)?;

        let mut cards = Vec::with_capacity(images.len());
        for (i, src) in images.iter().enumerate() {
            let card = build_card(document, &theme, i, images.len(), src)?;
            dom::append(&deck, &card.root)?;
            cards.push(card);
        }

        let indicator = build_indicator(document, &theme)?;
        dom::append(&sticky, &indicator)?;

        let stage = Stage {
            container,
            cards,
            indicator: dom::style_of(&indicator),
            bounce: indicator_bounce()?,
            theme,
        };
        stage.apply(0.0);
        Ok(stage)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn theme_name(&self) -> &'static str {
        self.theme.name
    }

    /// Write every card's style for global `progress`.
    pub fn apply(&self, progress: f32) {
        let total = self.cards.len();
        for (i, card) in self.cards.iter().enumerate() {
            let Some(s) = map_card(progress, i, total, &self.theme) else {
                continue;
            };
            _ = card.style.set_property("opacity", &format!("{:.4}", s.opacity));
            _ = card.style.set_property("transform", &s.css_transform());
        }
    }

    pub fn animate_indicator(&self, elapsed_sec: f32) {
        if let Some(style) = &self.indicator {
            let y = indicator_offset_px(elapsed_sec, &self.bounce);
            _ = style.set_property("transform", &format!("translate(-50%, {:.2}px)", y));
        }
    }
}

fn build_card(
    document: &web::Document,
    theme: &Theme,
    index: usize,
    total: usize,
    src: &str,
) -> anyhow::Result<CardElement> {
    // z-index and stack offset do not depend on progress
    let root = dom::create_element(
        document,
        "div",
        None,
        &format!(
            "position:absolute;inset:0;width:100%;height:100%;top:{}px;\
             transform-style:preserve-3d;transform-origin:{};filter:{};will-change:transform,opacity;",
            stack_offset_px(index),
            theme.hinge.css_origin(),
            card_shadow_filter(index),
        ),
    )?;

    let panel = dom::create_element(
        document,
        "div",
        None,
        &format!(
            "position:relative;width:100%;height:100%;border-radius:{}px;overflow:hidden;\
             box-shadow:0 10px 40px rgba(0,0,0,0.4);border:1px solid {};",
            CARD_RADIUS_PX, theme.palette.card_border
        ),
    )?;

    let img_el = dom::create_element(
        document,
        "img",
        None,
        "position:absolute;inset:0;width:100%;height:100%;object-fit:cover;",
    )?;
    let img: web::HtmlImageElement = img_el
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_alt(&card_alt_text(index));
    _ = img.set_attribute("loading", if index == 0 { "eager" } else { "lazy" });
    _ = img.set_attribute("decoding", "async");
    wire_image_error(&img, index);
    img.set_src(src);

    let overlay = dom::create_element(
        document,
        "div",
        None,
        "position:absolute;inset:0;background:linear-gradient(to top, rgba(0,0,0,0.2), transparent);",
    )?;

    dom::append(&panel, &img)?;
    dom::append(&panel, &overlay)?;
    dom::append(&root, &panel)?;

    let style = dom::style_of(&root).ok_or_else(|| anyhow::anyhow!("card {} has no style", index))?;
    _ = style.set_property("z-index", &stack_z_index(index, total).to_string());
    Ok(CardElement { root, style })
}

fn build_indicator(document: &web::Document, theme: &Theme) -> anyhow::Result<web::Element> {
    let color = theme.palette.indicator_color;
    let pill = dom::create_element(
        document,
        "div",
        Some(INDICATOR_ID),
        &format!(
            "position:absolute;bottom:32px;left:50%;transform:translate(-50%, 0);width:24px;\
             height:40px;border:2px solid {};border-radius:9999px;display:flex;\
             justify-content:center;box-sizing:border-box;opacity:0.6;",
            color
        ),
    )?;
    let dot = dom::create_element(
        document,
        "div",
        None,
        &format!(
            "width:4px;height:12px;margin-top:8px;border-radius:9999px;background:{};",
            color
        ),
    )?;
    dom::append(&pill, &dot)?;
    Ok(pill)
}

fn wire_image_error(img: &web::HtmlImageElement, index: usize) {
    let closure = Closure::wrap(Box::new(move || {
        log::warn!("[stage] image for card {} failed to load", index + 1);
    }) as Box<dyn FnMut()>);
    _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
}
