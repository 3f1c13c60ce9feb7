//! One module per page behavior.
//!
//! Each `mount` reads the elements it needs, wires listeners that live for
//! the page's lifetime and returns early when its elements are absent.

pub mod contact;
pub mod filters;
pub mod lifecycle;
pub mod navigation;
pub mod progress;
pub mod reveal;
pub mod scroll_top;
pub mod smooth_scroll;
pub mod typing;

pub use contact::FetchTransport;
pub use typing::TypingTask;
