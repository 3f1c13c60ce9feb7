//! Element ids and selectors the page markup provides.

pub const NAVBAR: &str = "navbar";
pub const NAV_TOGGLE: &str = "navToggle";
pub const NAV_MENU: &str = "navMenu";
pub const NAV_LINK: &str = ".nav-link";
pub const SECTION: &str = "section[id]";

pub const TYPING_TEXT: &str = "typingText";

pub const FILTER_BUTTON: &str = ".filter-btn";
pub const PROJECT_CARD: &str = ".project-card";
pub const SKILL_CATEGORY_CLASS: &str = "skill-category";
pub const SKILL_TAG: &str = ".skill-tag";

pub const CONTACT_FORM: &str = "contactForm";
pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
pub const FORM_FIELD: &str = "input, textarea";

pub const COPYRIGHT_YEAR: &str = "copyright-year";

/// Optional `<script type="application/json">` holding a `FolioConfig`
pub const CONFIG_SCRIPT: &str = "folio-config";

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const NO_SCROLL_CLASS: &str = "no-scroll";
