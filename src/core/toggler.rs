// Active Element Toggler
// Keeps exactly one element expanded among those routed through it

use std::sync::Mutex;

use tracing::{debug, trace};

use super::element::{Element, ElementRef, COLLAPSED_WIDTH, EXPANDED_WIDTH};

/// Tracks the currently active element and swaps it on every toggle
///
/// There is no toggle-off: toggling the active element collapses it and then
/// immediately expands it again, leaving it active.
pub struct ActiveElementToggler<R: ElementRef> {
    active: Option<R::Weak>,
}

impl<R: ElementRef> ActiveElementToggler<R> {
    /// Create a toggler with no active element
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Make `element` the active one
    pub fn toggle(&mut self, element: &R) {
        if let Some(previous) = &self.active {
            match R::upgrade(previous) {
                Some(previous) => {
                    if previous.with_mut(collapse).is_none() {
                        debug!("previous active element is borrowed, collapse skipped");
                    }
                }
                None => debug!("previous active element was dropped, collapse skipped"),
            }
        }

        if element.with_mut(expand).is_none() {
            debug!("element is borrowed, expand skipped");
        }

        self.active = Some(element.downgrade());
        trace!("active element replaced");
    }

    /// The active element, if it still exists
    pub fn active(&self) -> Option<R> {
        self.active.as_ref().and_then(R::upgrade)
    }

    /// Whether `element` is the one held as active
    pub fn is_active(&self, element: &R) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| element.is_same(active))
    }

    /// Whether any element has been activated, even if it is gone since
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<R: ElementRef> Default for ActiveElementToggler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ElementRef> std::fmt::Debug for ActiveElementToggler<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveElementToggler")
            .field("has_active", &self.active.is_some())
            .finish()
    }
}

fn collapse<E: Element + ?Sized>(element: &mut E) {
    element.set_width(COLLAPSED_WIDTH);
    element.set_active(false);
}

fn expand<E: Element + ?Sized>(element: &mut E) {
    element.set_width(EXPANDED_WIDTH);
    element.set_active(true);
}

/// Toggler for hosts that may call `toggle` from several threads
///
/// The collapse, expand and reassign steps run under one lock.
pub struct SharedToggler<R: ElementRef> {
    inner: Mutex<ActiveElementToggler<R>>,
}

impl<R: ElementRef> SharedToggler<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ActiveElementToggler::new()),
        }
    }

    pub fn toggle(&self, element: &R) {
        self.lock().toggle(element);
    }

    pub fn active(&self) -> Option<R> {
        self.lock().active()
    }

    pub fn is_active(&self, element: &R) -> bool {
        self.lock().is_active(element)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ActiveElementToggler<R>> {
        // The slot is a single optional reference, so a poisoned lock is still consistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R: ElementRef> Default for SharedToggler<R> {
    fn default() -> Self {
        Self::new()
    }
}
