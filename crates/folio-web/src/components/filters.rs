//! Project filter buttons.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CardTransition, FilterKey, FolioConfig, FolioResult, ProjectCard, ProjectFilter};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::selectors::{ACTIVE_CLASS, FILTER_BUTTON, PROJECT_CARD};

struct FilterBar {
    filter: RefCell<ProjectFilter>,
    buttons: Vec<HtmlElement>,
    cards: Vec<HtmlElement>,
    /// One pending timer per card; a new selection cancels the previous one
    timers: RefCell<Vec<Option<Timeout>>>,
}

impl FilterBar {
    fn select(&self, button: usize) {
        let key = self.buttons[button]
            .get_attribute("data-filter")
            .map(|key| FilterKey::parse(&key))
            .unwrap_or(FilterKey::All);
        let cards: Vec<ProjectCard> = self
            .cards
            .iter()
            .map(|card| ProjectCard::new(card.get_attribute("data-category").unwrap_or_default()))
            .collect();

        let transitions = self.filter.borrow_mut().select(button, &key, &cards);
        for (index, btn) in self.buttons.iter().enumerate() {
            dom::set_class(btn, ACTIVE_CLASS, index == button);
        }

        let mut timers = self.timers.borrow_mut();
        for ((card, transition), timer) in self.cards.iter().zip(transitions).zip(timers.iter_mut()) {
            *timer = Some(apply(card.clone(), transition));
        }
        tracing::debug!(?key, "project filter applied");
    }
}

fn apply(card: HtmlElement, transition: CardTransition) -> Timeout {
    match transition {
        CardTransition::FadeIn { delay } => {
            dom::set_style(&card, "display", "block");
            Timeout::new(dom::millis(delay), move || {
                dom::set_style(&card, "opacity", "1");
                dom::set_style(&card, "transform", "translateY(0)");
            })
        }
        CardTransition::FadeOut { hide_after } => {
            dom::set_style(&card, "opacity", "0");
            dom::set_style(&card, "transform", "translateY(20px)");
            Timeout::new(dom::millis(hide_after), move || {
                dom::set_style(&card, "display", "none");
            })
        }
    }
}

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let buttons: Vec<HtmlElement> = dom::query_all(document, FILTER_BUTTON)?;
    if buttons.is_empty() {
        tracing::debug!("no project filters on page");
        return Ok(());
    }
    let cards: Vec<HtmlElement> = dom::query_all(document, PROJECT_CARD)?;

    let bar = Rc::new(FilterBar {
        filter: RefCell::new(ProjectFilter::new(config.timings.clone())),
        timers: RefCell::new(cards.iter().map(|_| None).collect()),
        buttons,
        cards,
    });

    for (index, button) in bar.buttons.iter().enumerate() {
        let bar = Rc::clone(&bar);
        EventListener::new(button, "click", move |_event| bar.select(index)).forget();
    }

    tracing::debug!(
        buttons = bar.buttons.len(),
        cards = bar.cards.len(),
        "project filters mounted"
    );
    Ok(())
}
