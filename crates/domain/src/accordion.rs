//! Mutually exclusive expand/collapse state for the theme cards.

use crate::error::DomainError;
use crate::ids::CardIndex;
use crate::selection::Selection;

/// A fixed set of cards where at most one is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    expanded: Selection<CardIndex>,
}

/// Result of toggling a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionChange {
    /// Card that was collapsed (the toggled card itself, or the one it replaced)
    pub collapsed: Option<CardIndex>,
    /// Card that is now expanded
    pub expanded: Option<CardIndex>,
}

impl Accordion {
    /// Create an accordion of `len` collapsed cards
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: Selection::none(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn expanded(&self) -> Option<CardIndex> {
        self.expanded.active()
    }

    pub fn is_expanded(&self, card: CardIndex) -> bool {
        self.expanded.is_active(card)
    }

    /// Collapse `card` if it is expanded, otherwise collapse every other
    /// card and expand it.
    pub fn toggle(&mut self, card: CardIndex) -> Result<AccordionChange, DomainError> {
        if card.get() >= self.len {
            return Err(DomainError::not_found(CardIndex::ENTITY, card.to_string()));
        }

        let change = self.expanded.toggle(card);
        Ok(AccordionChange {
            collapsed: change.deactivated,
            expanded: change.activated,
        })
    }

    pub fn collapse_all(&mut self) -> Option<CardIndex> {
        self.expanded.clear().deactivated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(i: usize) -> CardIndex {
        CardIndex::new(i)
    }

    fn expanded_count(accordion: &Accordion) -> usize {
        (0..accordion.len())
            .filter(|i| accordion.is_expanded(card(*i)))
            .count()
    }

    #[test]
    fn test_expand_collapsed_card() {
        let mut accordion = Accordion::new(4);
        let change = accordion.toggle(card(1)).unwrap();

        assert_eq!(change.collapsed, None);
        assert_eq!(change.expanded, Some(card(1)));
        assert!(accordion.is_expanded(card(1)));
    }

    #[test]
    fn test_expanding_other_card_collapses_previous() {
        let mut accordion = Accordion::new(4);
        accordion.toggle(card(0)).unwrap();
        let change = accordion.toggle(card(3)).unwrap();

        assert_eq!(change.collapsed, Some(card(0)));
        assert_eq!(change.expanded, Some(card(3)));
        assert!(!accordion.is_expanded(card(0)));
        assert!(accordion.is_expanded(card(3)));
        assert_eq!(expanded_count(&accordion), 1);
    }

    #[test]
    fn test_toggle_expanded_card_collapses_it() {
        let mut accordion = Accordion::new(4);
        accordion.toggle(card(2)).unwrap();
        let change = accordion.toggle(card(2)).unwrap();

        assert_eq!(change.collapsed, Some(card(2)));
        assert_eq!(change.expanded, None);
        assert_eq!(expanded_count(&accordion), 0);
    }

    #[test]
    fn test_never_two_expanded() {
        let mut accordion = Accordion::new(5);
        for i in [0, 4, 4, 1, 2, 2, 3, 0] {
            accordion.toggle(card(i)).unwrap();
            assert!(expanded_count(&accordion) <= 1);
        }
    }

    #[test]
    fn test_out_of_range_card() {
        let mut accordion = Accordion::new(2);
        let err = accordion.toggle(card(2)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn test_collapse_all() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(card(1)).unwrap();
        assert_eq!(accordion.collapse_all(), Some(card(1)));
        assert_eq!(accordion.collapse_all(), None);
    }
}
