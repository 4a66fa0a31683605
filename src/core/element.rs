// Element Seams
// Traits the host implements so the toggler can restyle nodes it does not own

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex, TryLockError, Weak as SyncWeak};

/// Width applied to an element when it is not active
pub const COLLAPSED_WIDTH: u16 = 100;

/// Width applied to the element made active
pub const EXPANDED_WIDTH: u16 = 300;

/// Class name marking the active element
pub const ACTIVE_CLASS: &str = "active";

/// The two observable properties the toggler writes on a host node
pub trait Element {
    /// Set the numeric width in host units
    fn set_width(&mut self, width: u16);

    /// Add or remove the active designation
    fn set_active(&mut self, active: bool);
}

/// Shared handle to a host-owned element
///
/// The toggler keeps only the weak form, so holding an element as the active
/// one never extends its lifetime. `with_mut` returns `None` when the element
/// cannot be borrowed at that moment.
pub trait ElementRef: Clone {
    type Target: Element + ?Sized;
    type Weak: Clone;

    fn downgrade(&self) -> Self::Weak;

    fn upgrade(weak: &Self::Weak) -> Option<Self>;

    /// Pointer identity between a strong handle and a weak one
    fn is_same(&self, weak: &Self::Weak) -> bool;

    fn with_mut<T>(&self, f: impl FnOnce(&mut Self::Target) -> T) -> Option<T>;
}

impl<E: Element + ?Sized> ElementRef for Rc<RefCell<E>> {
    type Target = E;
    type Weak = Weak<RefCell<E>>;

    fn downgrade(&self) -> Self::Weak {
        Rc::downgrade(self)
    }

    fn upgrade(weak: &Self::Weak) -> Option<Self> {
        weak.upgrade()
    }

    fn is_same(&self, weak: &Self::Weak) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(self), weak.as_ptr())
    }

    fn with_mut<T>(&self, f: impl FnOnce(&mut E) -> T) -> Option<T> {
        let mut element = self.try_borrow_mut().ok()?;
        Some(f(&mut element))
    }
}

impl<E: Element + ?Sized> ElementRef for Arc<Mutex<E>> {
    type Target = E;
    type Weak = SyncWeak<Mutex<E>>;

    fn downgrade(&self) -> Self::Weak {
        Arc::downgrade(self)
    }

    fn upgrade(weak: &Self::Weak) -> Option<Self> {
        weak.upgrade()
    }

    fn is_same(&self, weak: &Self::Weak) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(self), weak.as_ptr())
    }

    fn with_mut<T>(&self, f: impl FnOnce(&mut E) -> T) -> Option<T> {
        // Never wait on a lock the host holds, the toggler lock may be held by the caller
        match self.try_lock() {
            Ok(mut element) => Some(f(&mut element)),
            // Width and class are plain values, a poisoned lock still holds a usable node
            Err(TryLockError::Poisoned(poisoned)) => Some(f(&mut poisoned.into_inner())),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

/// Set of class names on a host node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: &str) {
        if !self.classes.contains(class) {
            self.classes.insert(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Node {
        width: u16,
        active: bool,
    }

    impl Element for Node {
        fn set_width(&mut self, width: u16) {
            self.width = width;
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    #[test]
    fn test_class_list_add_remove() {
        let mut classes = ClassList::new();
        classes.add("card");
        classes.add(ACTIVE_CLASS);
        classes.add(ACTIVE_CLASS);

        assert!(classes.contains(ACTIVE_CLASS));
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["active", "card"]);

        classes.remove(ACTIVE_CLASS);
        classes.remove("missing");
        assert!(!classes.contains(ACTIVE_CLASS));
        assert!(classes.contains("card"));
    }

    #[test]
    fn test_rc_identity() {
        let a = Rc::new(RefCell::new(Node::default()));
        let b = Rc::new(RefCell::new(Node::default()));
        let weak_a = a.downgrade();

        assert!(a.is_same(&weak_a));
        assert!(!b.is_same(&weak_a));
    }

    #[test]
    fn test_rc_with_mut_skips_borrowed() {
        let a = Rc::new(RefCell::new(Node::default()));
        let _guard = a.borrow();

        assert!(a.with_mut(|node| node.set_width(EXPANDED_WIDTH)).is_none());
    }

    #[test]
    fn test_rc_upgrade_after_drop() {
        let a = Rc::new(RefCell::new(Node::default()));
        let weak_a = a.downgrade();
        drop(a);

        assert!(<Rc<RefCell<Node>> as ElementRef>::upgrade(&weak_a).is_none());
    }

    #[test]
    fn test_arc_with_mut_recovers_poison() {
        let a = Arc::new(Mutex::new(Node::default()));
        let poisoner = Arc::clone(&a);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(a.is_poisoned());
        assert!(a.with_mut(|node| node.set_active(true)).is_some());
        assert!(a.lock().unwrap_or_else(|p| p.into_inner()).active);
    }

    #[test]
    fn test_arc_with_mut_skips_locked() {
        let a = Arc::new(Mutex::new(Node::default()));
        let _guard = a.lock().unwrap();

        assert!(a.with_mut(|node| node.set_width(EXPANDED_WIDTH)).is_none());
    }
}
