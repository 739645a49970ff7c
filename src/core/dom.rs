// src/core/dom.rs
//
// Thin helpers over `scraper` used by the field extractor. Every lookup is
// tolerant: a bad selector or a missing element yields `None`/empty.
use scraper::{ElementRef, Node, Selector};

use super::rich::{RichText, Segment};
use super::sanitize::normalize_ws;

/// Parse a CSS selector, logging (not failing) when it is invalid.
pub fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Selector: invalid {:?}: {:?}", css, e);
            None
        }
    }
}

pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Raw descendant text, untouched (newlines and indentation kept).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Whitespace-normalized text of every match, space-joined; empty when none.
pub fn all_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    let parts: Vec<String> = scope.select(sel).map(text_of).collect();
    normalize_ws(&parts.join(" "))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Contents (not the elements themselves) of every match, in document order,
/// as one rich value.
pub fn fragment_all(scope: ElementRef<'_>, sel: &Selector) -> RichText {
    let mut out = RichText::new();
    for el in scope.select(sel) {
        out.push_text(" ");
        push_children(el, &mut out);
    }
    out.normalized()
}

fn push_children(el: ElementRef<'_>, out: &mut RichText) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_text(t),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_element(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn push_element(el: ElementRef<'_>, out: &mut RichText) {
    match el.value().name() {
        "a" => out.push(Segment::Link {
            label: normalize_ws(&text_of(el)),
            href: s!(attr(el, "href").unwrap_or("")),
        }),
        "img" => out.push(image_segment(el, None)),
        "br" => out.push_text(" "),
        "script" | "style" | "template" => {}
        _ => push_children(el, out),
    }
}

/// An `<img>` as a segment; `width` overrides the element's own width.
pub fn image_segment(img: ElementRef<'_>, width: Option<u32>) -> Segment {
    let own_width = attr(img, "width").and_then(|w| w.trim().parse::<u32>().ok());
    Segment::Image {
        src: s!(attr(img, "src").unwrap_or("")),
        alt: s!(attr(img, "alt").unwrap_or("")),
        width: width.or(own_width),
    }
}
