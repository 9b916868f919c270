//! Page navigation helpers: the mobile menu and in-page anchor scrolling.

/// Mobile navigation menu visibility.
pub trait NavMenuView {
    fn set_menu_open(&mut self, open: bool);
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug)]
pub struct NavMenu<V> {
    open: bool,
    view: V,
}

impl<V: NavMenuView> NavMenu<V> {
    pub fn new(view: V) -> Self {
        Self::with_open(view, false)
    }

    /// Start from the state the markup already shows.
    pub fn with_open(view: V, open: bool) -> Self {
        Self { open, view }
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.view.set_menu_open(self.open);
        self.open
    }

    /// A menu link was followed.
    pub fn close(&mut self) {
        self.open = false;
        self.view.set_menu_open(false);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Element id an in-page link scrolls to.
///
/// Returns `None` for anything that is not a non-empty fragment, including a
/// bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeMenu {
        open: bool,
        writes: usize,
    }

    impl NavMenuView for FakeMenu {
        fn set_menu_open(&mut self, open: bool) {
            self.open = open;
            self.writes += 1;
        }
    }

    #[test]
    fn test_toggle_and_close() {
        let mut menu = NavMenu::new(FakeMenu::default());
        assert!(!menu.is_open());

        assert!(menu.toggle());
        assert!(menu.view.open);
        assert!(!menu.toggle());
        assert!(!menu.view.open);

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        assert!(!menu.view.open);
        assert_eq!(menu.view.writes, 4);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("projects.html"), None);
        assert_eq!(anchor_target(""), None);
    }
}
