//! Scroll handlers throttled to one update per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::FrameThrottle;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Window;

use crate::dom;

/// Call `update` with the scroll offset on the next frame after a scroll.
///
/// Scroll events arriving while a frame is pending are dropped. `update`
/// also runs once immediately so a page reloaded mid-scroll starts in the
/// right state. The listener lives as long as the page.
pub fn on_scroll_frame<F>(window: &Window, update: F)
where
    F: FnMut(f64) + 'static,
{
    let update = Rc::new(RefCell::new(update));
    let throttle = Rc::new(RefCell::new(FrameThrottle::new()));
    // Replaced on the next schedule, never from inside its own callback
    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    (&mut *update.borrow_mut())(dom::scroll_y(window));

    let window_in_frame = window.clone();
    EventListener::new(window, "scroll", move |_event| {
        if !throttle.borrow_mut().try_schedule() {
            return;
        }

        let update = Rc::clone(&update);
        let throttle = Rc::clone(&throttle);
        let window = window_in_frame.clone();
        let frame = request_animation_frame(move |_timestamp| {
            (&mut *update.borrow_mut())(dom::scroll_y(&window));
            throttle.borrow_mut().frame_done();
        });
        *pending.borrow_mut() = Some(frame);
    })
    .forget();
}
