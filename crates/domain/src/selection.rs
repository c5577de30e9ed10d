//! Single-selection state shared by every widget.
//!
//! A widget has at most one active item. The only way to change the active
//! item is through [`Selection::select`], [`Selection::toggle`] or
//! [`Selection::clear`], so the mutual-exclusion invariant cannot be broken
//! by ad hoc mutation.

/// Currently selected key, or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    active: Option<K>,
}

/// What a selection update did: the key that lost the active state (if any)
/// and the key that gained it (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange<K> {
    pub deactivated: Option<K>,
    pub activated: Option<K>,
}

impl<K> SelectionChange<K> {
    pub const fn unchanged() -> Self {
        Self {
            deactivated: None,
            activated: None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.deactivated.is_none() && self.activated.is_none()
    }
}

impl<K: Copy + Eq> Selection<K> {
    pub const fn none() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == Some(key)
    }

    /// Detail panels are visible iff this returns true.
    pub fn is_any_active(&self) -> bool {
        self.active.is_some()
    }

    /// Make `key` the active item, deactivating the previous one first.
    ///
    /// Re-selecting the active key keeps it active and reports it as
    /// activated again, so callers can refresh whatever displays it.
    pub fn select(&mut self, key: K) -> SelectionChange<K> {
        let previous = self.active.take();
        self.active = Some(key);
        SelectionChange {
            deactivated: previous.filter(|p| *p != key),
            activated: Some(key),
        }
    }

    /// Deactivate `key` if it is active, otherwise select it.
    pub fn toggle(&mut self, key: K) -> SelectionChange<K> {
        if self.is_active(key) {
            self.clear()
        } else {
            self.select(key)
        }
    }

    pub fn clear(&mut self) -> SelectionChange<K> {
        SelectionChange {
            deactivated: self.active.take(),
            activated: None,
        }
    }
}

impl<K: Copy + Eq> Default for Selection<K> {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_from_empty() {
        let mut selection = Selection::none();
        let change = selection.select(3);

        assert_eq!(change.deactivated, None);
        assert_eq!(change.activated, Some(3));
        assert!(selection.is_active(3));
        assert!(selection.is_any_active());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = Selection::none();
        selection.select(1);
        let change = selection.select(2);

        assert_eq!(change.deactivated, Some(1));
        assert_eq!(change.activated, Some(2));
        assert!(!selection.is_active(1));
        assert!(selection.is_active(2));
    }

    #[test]
    fn test_reselect_keeps_active() {
        let mut selection = Selection::none();
        selection.select(5);
        let change = selection.select(5);

        assert_eq!(change.deactivated, None);
        assert_eq!(change.activated, Some(5));
        assert_eq!(selection.active(), Some(5));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::none();
        selection.select(7);
        let change = selection.clear();

        assert_eq!(change.deactivated, Some(7));
        assert_eq!(change.activated, None);
        assert!(!selection.is_any_active());

        // Clearing again is a no-op
        assert!(selection.clear().is_unchanged());
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::none();
        assert_eq!(selection.toggle(2).activated, Some(2));

        let change = selection.toggle(2);
        assert_eq!(change.deactivated, Some(2));
        assert_eq!(change.activated, None);
        assert_eq!(selection.active(), None);

        selection.toggle(2);
        let change = selection.toggle(4);
        assert_eq!(change.deactivated, Some(2));
        assert_eq!(change.activated, Some(4));
    }
}
