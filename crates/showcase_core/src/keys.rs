//! Keyboard navigation for the page components.
//!
//! The page installs a single `keydown` listener and feeds every recognised
//! key through a [`KeyDispatcher`]. Each component registers itself as a
//! [`KeyTarget`]; only targets reporting themselves active receive the key.
//! The carousel is always active, a modal viewer only while its overlay is
//! open.

use std::cell::RefCell;
use std::rc::Rc;

/// Keys the page components react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value to a navigation key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(NavKey::Left),
            "ArrowRight" | "Right" => Some(NavKey::Right),
            "Escape" | "Esc" => Some(NavKey::Escape),
            _ => None,
        }
    }

    /// Step applied to the current index, if this key navigates.
    pub fn step(&self) -> Option<isize> {
        match self {
            NavKey::Left => Some(-1),
            NavKey::Right => Some(1),
            NavKey::Escape => None,
        }
    }
}

/// A component that can react to navigation keys.
pub trait KeyTarget {
    /// Whether the target currently accepts keys.
    fn is_active(&self) -> bool;

    /// Handle a key. Returns `true` when the key changed the component.
    fn handle_key(&mut self, key: NavKey) -> bool;
}

/// Routes navigation keys to registered components.
#[derive(Default)]
pub struct KeyDispatcher {
    targets: Vec<Rc<RefCell<dyn KeyTarget>>>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, target: Rc<RefCell<dyn KeyTarget>>) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Forward `key` to every active target.
    ///
    /// Returns `true` if any target handled it.
    pub fn dispatch(&self, key: NavKey) -> bool {
        let mut handled = false;
        for target in &self.targets {
            let mut target = target.borrow_mut();
            if target.is_active() {
                handled |= target.handle_key(key);
            }
        }
        if handled {
            log::trace!("Key {:?} handled", key);
        }
        handled
    }

    /// Forward a raw `KeyboardEvent.key` value.
    pub fn dispatch_name(&self, name: &str) -> bool {
        NavKey::from_key_name(name).is_some_and(|key| self.dispatch(key))
    }
}

impl std::fmt::Debug for KeyDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDispatcher")
            .field("targets", &self.targets.len())
            .finish()
    }
}
