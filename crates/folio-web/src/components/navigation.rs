//! Navbar scroll styling, active links and the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, FolioResult, NavLink, Navigation, SectionBounds};
use gloo::events::EventListener;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::selectors::{
    ACTIVE_CLASS, NAVBAR, NAV_LINK, NAV_MENU, NAV_TOGGLE, NO_SCROLL_CLASS, SCROLLED_CLASS, SECTION,
};

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let window = dom::window()?;
    let body = dom::body(document)?;
    let navbar: Option<Element> = dom::by_id(document, NAVBAR);
    let toggle: Option<Element> = dom::by_id(document, NAV_TOGGLE);
    let menu: Option<Element> = dom::by_id(document, NAV_MENU);
    let links: Vec<Element> = dom::query_all(document, NAV_LINK)?;

    let nav = Rc::new(RefCell::new(Navigation::new(
        links
            .iter()
            .map(|link| NavLink::new(link.get_attribute("href").unwrap_or_default()))
            .collect(),
        &config.scroll,
    )));

    {
        let nav = Rc::clone(&nav);
        let document = document.clone();
        let links = links.clone();
        crate::frame::on_scroll_frame(&window, move |scroll_y| {
            let sections = measure_sections(&document);
            let update = nav.borrow_mut().on_scroll(scroll_y, &sections);

            if let Some(navbar) = &navbar {
                dom::set_class(navbar, SCROLLED_CLASS, update.scrolled);
            }
            for (index, link) in links.iter().enumerate() {
                dom::set_class(link, ACTIVE_CLASS, update.active == Some(index));
            }
        });
    }

    let menu_parts = MenuParts { menu, toggle, body };

    if let Some(toggle) = menu_parts.toggle.clone() {
        let nav = Rc::clone(&nav);
        let parts = menu_parts.clone();
        EventListener::new(&toggle, "click", move |_event| {
            let open = nav.borrow_mut().toggle_menu();
            parts.apply(open);
        })
        .forget();
    }

    for link in &links {
        let nav = Rc::clone(&nav);
        let parts = menu_parts.clone();
        EventListener::new(link, "click", move |_event| {
            nav.borrow_mut().close_menu();
            parts.apply(false);
        })
        .forget();
    }

    tracing::debug!(links = links.len(), "navigation mounted");
    Ok(())
}

/// Elements whose classes follow the menu state.
#[derive(Clone)]
struct MenuParts {
    menu: Option<Element>,
    toggle: Option<Element>,
    body: HtmlElement,
}

impl MenuParts {
    fn apply(&self, open: bool) {
        if let Some(menu) = &self.menu {
            dom::set_class(menu, ACTIVE_CLASS, open);
        }
        if let Some(toggle) = &self.toggle {
            dom::set_class(toggle, ACTIVE_CLASS, open);
        }
        dom::set_class(&self.body, NO_SCROLL_CLASS, open);
    }
}

/// Sections are measured on every frame since layout shifts as images load.
fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    dom::query_all::<HtmlElement>(document, SECTION)
        .unwrap_or_default()
        .into_iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}
