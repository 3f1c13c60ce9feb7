//! Typewriter text in `#typingText`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{FolioConfig, FolioResult, TypingEffect};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;
use crate::selectors::TYPING_TEXT;

struct TypingInner {
    element: Element,
    effect: RefCell<TypingEffect>,
    timer: RefCell<Option<Timeout>>,
    running: Cell<bool>,
}

/// Handle to a running typewriter; stopping cancels the pending tick.
#[derive(Clone)]
pub struct TypingTask {
    inner: Rc<TypingInner>,
}

impl TypingTask {
    pub fn new(element: Element, effect: TypingEffect) -> Self {
        Self {
            inner: Rc::new(TypingInner {
                element,
                effect: RefCell::new(effect),
                timer: RefCell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    /// Start ticking; the first character appears immediately.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        tick(&self.inner);
    }

    /// Stop ticking, leaving the current text in place.
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.timer.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

fn tick(inner: &Rc<TypingInner>) {
    if !inner.running.get() {
        return;
    }

    let frame = inner.effect.borrow_mut().tick();
    inner.element.set_text_content(Some(&frame.text));

    let next = Rc::clone(inner);
    let timeout = Timeout::new(dom::millis(frame.next_delay), move || tick(&next));
    *inner.timer.borrow_mut() = Some(timeout);
}

/// Start the effect if the page has a typing element.
pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<Option<TypingTask>> {
    let Some(element) = dom::by_id::<Element>(document, TYPING_TEXT) else {
        tracing::debug!("no typing element on page");
        return Ok(None);
    };

    let effect = TypingEffect::new(&config.typing.phrases, config.timings.clone())?;
    let task = TypingTask::new(element, effect);
    task.start();

    tracing::debug!(phrases = config.typing.phrases.len(), "typing effect started");
    Ok(Some(task))
}
