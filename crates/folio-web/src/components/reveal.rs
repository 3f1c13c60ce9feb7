//! Reveal-on-scroll through an `IntersectionObserver`.
//!
//! Observer entries are translated into [`VisibilityEntry`] batches for
//! [`ScrollReveal`]; the effects it returns are applied to the elements.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::{ANIMATED_CLASS, REVEAL_SELECTOR};
use folio_core::{
    FolioConfig, FolioResult, RevealEffect, RevealKind, ScrollReveal, SlideDirection,
    VisibilityEntry, VisibilityListener,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::selectors::{PROJECT_CARD, SKILL_CATEGORY_CLASS, SKILL_TAG};

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let mut reveal = ScrollReveal::new(config);
    let mut targets: Vec<Element> = Vec::new();

    for element in dom::query_all::<Element>(document, REVEAL_SELECTOR)? {
        register(&mut reveal, &mut targets, element);
    }
    for (index, card) in dom::query_all::<Element>(document, PROJECT_CARD)?
        .into_iter()
        .enumerate()
    {
        dom::set_class(&card, SlideDirection::for_index(index).class_name(), true);
        register(&mut reveal, &mut targets, card);
    }

    if targets.is_empty() {
        tracing::debug!("no reveal targets on page");
        return Ok(());
    }

    let reveal = Rc::new(RefCell::new(reveal));
    let targets = Rc::new(targets);

    let callback = {
        let reveal = Rc::clone(&reveal);
        let targets = Rc::clone(&targets);
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch = to_visibility_entries(&entries, &targets);
                let effects = {
                    let mut reveal = reveal.borrow_mut();
                    reveal.on_visibility_change(&batch);
                    reveal.drain_effects()
                };
                for effect in effects {
                    apply(effect, &targets, &observer);
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.scroll.reveal_root_margin);
    options.set_threshold(&JsValue::from_f64(config.scroll.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_error)?;
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }

    tracing::debug!(targets = targets.len(), "scroll reveal mounted");
    Ok(())
}

/// Track `element` unless it already matched an earlier selector.
fn register(reveal: &mut ScrollReveal, targets: &mut Vec<Element>, element: Element) {
    if targets.contains(&element) {
        return;
    }
    let kind = if element.class_list().contains(SKILL_CATEGORY_CLASS) {
        let tag_count = dom::query_all_in::<Element>(&element, SKILL_TAG)
            .map(|tags| tags.len())
            .unwrap_or(0);
        RevealKind::SkillCategory { tag_count }
    } else {
        RevealKind::Plain
    };
    reveal.register(kind);
    targets.push(element);
}

fn to_visibility_entries(entries: &js_sys::Array, targets: &[Element]) -> Vec<VisibilityEntry> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let target = targets.iter().position(|t| *t == entry.target())?;
            Some(VisibilityEntry {
                target,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect()
}

fn apply(effect: RevealEffect, targets: &[Element], observer: &IntersectionObserver) {
    match effect {
        RevealEffect::MarkAnimated { target } => {
            let element = &targets[target];
            dom::set_class(element, ANIMATED_CLASS, true);
            observer.unobserve(element);
        }
        RevealEffect::RevealTag { target, tag, delay } => {
            let tags = dom::query_all_in::<HtmlElement>(&targets[target], SKILL_TAG)
                .unwrap_or_default();
            let Some(tag) = tags.into_iter().nth(tag) else {
                return;
            };
            Timeout::new(dom::millis(delay), move || {
                dom::set_style(&tag, "opacity", "1");
                dom::set_style(&tag, "transform", "translateY(0)");
            })
            .forget();
        }
    }
}
