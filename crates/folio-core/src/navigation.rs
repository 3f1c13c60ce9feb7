//! Navbar styling, active-link tracking and the mobile menu.

use crate::config::ScrollConfig;

/// A page section measured from the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `scroll_y` falls within `[top - lead, top + height)`.
    pub fn contains(&self, scroll_y: f64, lead: f64) -> bool {
        scroll_y >= self.top - lead && scroll_y < self.top + self.height
    }
}

/// A navigation anchor pointing at a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The section id this link targets, if it is an in-page link.
    pub fn target_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Result of one scroll update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavUpdate {
    /// Whether the navbar carries the `scrolled` class
    pub scrolled: bool,
    /// Index into the link list of the one active link
    pub active: Option<usize>,
}

/// Navigation state owned by the navbar behavior.
#[derive(Debug, Clone)]
pub struct Navigation {
    links: Vec<NavLink>,
    scrolled_threshold: f64,
    section_lead: f64,
    scrolled: bool,
    active: Option<usize>,
    menu_open: bool,
}

impl Navigation {
    pub fn new(links: Vec<NavLink>, config: &ScrollConfig) -> Self {
        Self {
            links,
            scrolled_threshold: config.navbar_threshold,
            section_lead: config.section_lead,
            scrolled: false,
            active: None,
            menu_open: false,
        }
    }

    /// Recompute navbar state for a new scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> NavUpdate {
        self.scrolled = scroll_y > self.scrolled_threshold;
        self.active = self
            .current_section(scroll_y, sections)
            .and_then(|section| self.link_for(&section.id));

        NavUpdate {
            scrolled: self.scrolled,
            active: self.active,
        }
    }

    /// The section containing `scroll_y`; later sections win on overlap.
    pub fn current_section<'a>(
        &self,
        scroll_y: f64,
        sections: &'a [SectionBounds],
    ) -> Option<&'a SectionBounds> {
        sections
            .iter()
            .rev()
            .find(|section| section.contains(scroll_y, self.section_lead))
    }

    fn link_for(&self, section_id: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.target_id() == Some(section_id))
    }

    /// Flip the mobile menu and return the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (Navigation, Vec<SectionBounds>) {
        let links = vec![
            NavLink::new("#home"),
            NavLink::new("#about"),
            NavLink::new("#projects"),
            NavLink::new("/blog"),
        ];
        let sections = vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1200.0),
        ];
        (Navigation::new(links, &ScrollConfig::default()), sections)
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let (mut nav, sections) = page();
        assert!(!nav.on_scroll(0.0, &sections).scrolled);
        assert!(!nav.on_scroll(50.0, &sections).scrolled);
        assert!(nav.on_scroll(50.5, &sections).scrolled);
        assert!(nav.on_scroll(3000.0, &sections).scrolled);
    }

    #[test]
    fn test_active_link_follows_section() {
        let (mut nav, sections) = page();
        assert_eq!(nav.on_scroll(10.0, &sections).active, Some(0));
        assert_eq!(nav.on_scroll(900.0, &sections).active, Some(1));
        assert_eq!(nav.on_scroll(2000.0, &sections).active, Some(2));
    }

    #[test]
    fn test_section_lead_activates_next_section_early() {
        let (mut nav, sections) = page();
        // 100px above "about" both ranges match; the later section wins
        assert_eq!(nav.on_scroll(700.0, &sections).active, Some(1));
        assert_eq!(nav.on_scroll(699.0, &sections).active, Some(0));
    }

    #[test]
    fn test_no_active_link_past_last_section() {
        let (mut nav, sections) = page();
        nav.on_scroll(2000.0, &sections);
        assert_eq!(nav.on_scroll(2600.0, &sections).active, None);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_link_target_id() {
        assert_eq!(NavLink::new("#about").target_id(), Some("about"));
        assert_eq!(NavLink::new("#").target_id(), None);
        assert_eq!(NavLink::new("/blog").target_id(), None);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let (mut nav, _) = page();
        assert!(nav.toggle_menu());
        assert!(nav.is_menu_open());
        assert!(!nav.toggle_menu());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }
}
