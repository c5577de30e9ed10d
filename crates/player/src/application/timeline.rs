//! Timeline widget controller
//!
//! Tracks the active event and decides when a page click dismisses the
//! detail panel.
//!
//! Outside-click dismissal: the page root sees every click after the target's
//! own handlers have run (events bubble from the target to the root). Pointer
//! activation of a timeline element and clicks inside the detail panel
//! *claim* the click; the root handler only dismisses unclaimed clicks, and
//! always releases the claim.

use std::sync::Arc;

use exhibit_domain::{Dataset, DomainError, EventIndex, Selection, SelectionChange};

use super::{element_ids, Activation, ViewportClass};
use crate::ports::outbound::ScrollRequest;

/// One rendered timeline element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub index: EventIndex,
    pub year: String,
    pub title: String,
    pub aria_label: String,
    pub active: bool,
}

/// Contents of the timeline detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineDetail {
    pub title: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineTransition {
    pub change: SelectionChange<EventIndex>,
    /// Set on narrow viewports when the panel should be brought into view
    pub scroll: Option<ScrollRequest>,
}

#[derive(Debug, Clone)]
pub struct TimelineController {
    dataset: Arc<Dataset>,
    selection: Selection<EventIndex>,
    click_claimed: bool,
}

impl TimelineController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            selection: Selection::none(),
            click_claimed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.dataset.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.timeline.is_empty()
    }

    /// One item per event, in chronological order
    pub fn items(&self) -> Vec<TimelineItem> {
        self.dataset
            .timeline
            .iter()
            .enumerate()
            .map(|(i, event)| {
                let index = EventIndex::new(i);
                TimelineItem {
                    index,
                    year: event.year.clone(),
                    title: event.title.clone(),
                    aria_label: event.aria_label(),
                    active: self.selection.is_active(index),
                }
            })
            .collect()
    }

    pub fn active(&self) -> Option<EventIndex> {
        self.selection.active()
    }

    pub fn is_panel_visible(&self) -> bool {
        self.selection.is_any_active()
    }

    /// Panel contents, present iff an event is active
    pub fn detail(&self) -> Option<TimelineDetail> {
        let index = self.selection.active()?;
        let event = self.dataset.event(index).ok()?;
        Some(TimelineDetail {
            title: event.title.clone(),
            year: event.year.clone(),
            description: event.description.clone(),
        })
    }

    /// Select an event and reveal the detail panel
    pub fn activate(
        &mut self,
        index: EventIndex,
        activation: Activation,
        viewport: ViewportClass,
    ) -> Result<TimelineTransition, DomainError> {
        let event = self.dataset.event(index)?;
        tracing::debug!(index = %index, title = %event.title, ?activation, "timeline event selected");

        if activation == Activation::Pointer {
            self.click_claimed = true;
        }
        let change = self.selection.select(index);
        let scroll = viewport
            .is_narrow()
            .then(|| ScrollRequest::nearest(element_ids::TIMELINE_DETAIL));

        Ok(TimelineTransition { change, scroll })
    }

    /// Hide the detail panel (close control)
    pub fn close(&mut self) -> SelectionChange<EventIndex> {
        let change = self.selection.clear();
        if let Some(index) = change.deactivated {
            tracing::debug!(index = %index, "timeline detail closed");
        }
        change
    }

    /// Mark the current click as handled inside the widget
    pub fn claim_click(&mut self) {
        self.click_claimed = true;
    }

    /// Page-level click handler. Returns true if the panel was dismissed.
    pub fn dismiss_on_outside_click(&mut self) -> bool {
        if std::mem::take(&mut self.click_claimed) {
            return false;
        }
        if !self.is_panel_visible() {
            return false;
        }
        !self.close().is_unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_domain::TimelineEvent;

    fn controller() -> TimelineController {
        TimelineController::new(Arc::new(Dataset::builtin().unwrap()))
    }

    fn active_count(controller: &TimelineController) -> usize {
        controller.items().iter().filter(|item| item.active).count()
    }

    #[test]
    fn test_renders_one_item_per_event() {
        let controller = controller();
        let items = controller.items();

        assert_eq!(items.len(), 9);
        assert_eq!(items[0].year, "1858-1884");
        assert_eq!(items[0].title, "French Conquest and Colonization");
        assert_eq!(
            items[0].aria_label,
            "Learn more about French Conquest and Colonization"
        );
        assert_eq!(active_count(&controller), 0);
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_select_shows_matching_detail_for_every_event() {
        let mut controller = controller();
        let events: Vec<TimelineEvent> = controller.dataset.timeline.clone();

        for (i, event) in events.iter().enumerate() {
            controller
                .activate(EventIndex::new(i), Activation::Pointer, ViewportClass::Wide)
                .unwrap();

            let detail = controller.detail().unwrap();
            assert_eq!(detail.title, event.title);
            assert_eq!(detail.year, event.year);
            assert_eq!(detail.description, event.description);
            assert_eq!(active_count(&controller), 1);
            assert!(controller.items()[i].active);
        }
    }

    #[test]
    fn test_selecting_b_deactivates_a() {
        let mut controller = controller();
        let a = EventIndex::new(1);
        let b = EventIndex::new(4);

        controller
            .activate(a, Activation::Pointer, ViewportClass::Wide)
            .unwrap();
        let transition = controller
            .activate(b, Activation::Pointer, ViewportClass::Wide)
            .unwrap();

        assert_eq!(transition.change.deactivated, Some(a));
        assert_eq!(transition.change.activated, Some(b));
        assert_eq!(controller.active(), Some(b));
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn test_scroll_only_on_narrow_viewport() {
        let mut controller = controller();
        let wide = controller
            .activate(EventIndex::new(0), Activation::Pointer, ViewportClass::Wide)
            .unwrap();
        assert_eq!(wide.scroll, None);

        let narrow = controller
            .activate(EventIndex::new(2), Activation::Pointer, ViewportClass::Narrow)
            .unwrap();
        assert_eq!(narrow.scroll, Some(ScrollRequest::nearest("timeline-detail")));
    }

    #[test]
    fn test_close_clears_everything() {
        let mut controller = controller();
        controller
            .activate(EventIndex::new(3), Activation::Pointer, ViewportClass::Wide)
            .unwrap();

        let change = controller.close();
        assert_eq!(change.deactivated, Some(EventIndex::new(3)));
        assert!(!controller.is_panel_visible());
        assert_eq!(active_count(&controller), 0);
    }

    #[test]
    fn test_activating_click_does_not_dismiss() {
        let mut controller = controller();
        controller
            .activate(EventIndex::new(5), Activation::Pointer, ViewportClass::Wide)
            .unwrap();

        // The same click reaches the page root afterwards
        assert!(!controller.dismiss_on_outside_click());
        assert!(controller.is_panel_visible());

        // A later click elsewhere dismisses
        assert!(controller.dismiss_on_outside_click());
        assert!(!controller.is_panel_visible());
        assert_eq!(active_count(&controller), 0);
    }

    #[test]
    fn test_click_inside_panel_does_not_dismiss() {
        let mut controller = controller();
        controller
            .activate(EventIndex::new(0), Activation::Keyboard, ViewportClass::Wide)
            .unwrap();

        controller.claim_click();
        assert!(!controller.dismiss_on_outside_click());
        assert!(controller.is_panel_visible());
    }

    #[test]
    fn test_keyboard_activation_matches_pointer() {
        let mut by_pointer = controller();
        let mut by_keyboard = controller();
        let index = EventIndex::new(7);

        let pointer = by_pointer
            .activate(index, Activation::Pointer, ViewportClass::Narrow)
            .unwrap();
        let keyboard = by_keyboard
            .activate(index, Activation::Keyboard, ViewportClass::Narrow)
            .unwrap();

        assert_eq!(pointer, keyboard);
        assert_eq!(by_pointer.detail(), by_keyboard.detail());

        // Keyboard activation leaves no claim behind, so the next click
        // anywhere else dismisses.
        assert!(by_keyboard.dismiss_on_outside_click());
    }

    #[test]
    fn test_outside_click_with_hidden_panel_is_noop() {
        let mut controller = controller();
        assert!(!controller.dismiss_on_outside_click());
        assert!(!controller.is_panel_visible());
    }

    #[test]
    fn test_unknown_event() {
        let mut controller = controller();
        let err = controller
            .activate(EventIndex::new(9), Activation::Pointer, ViewportClass::Wide)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!controller.is_panel_visible());
        // A rejected activation does not claim the click
        assert!(!controller.dismiss_on_outside_click());
    }
}
