//! Timeline section: event list and detail panel

use dioxus::prelude::*;
use exhibit_domain::EventIndex;

use super::section_ids;
use crate::application::{element_ids, Activation};
use crate::error::{fail_fast, ExhibitError};
use crate::ui::presentation::keyboard::handle_activation_key;
use crate::ui::presentation::state::{
    use_exhibit_state, use_pending_scroll, use_viewport_class,
};

fn event_class(active: bool) -> &'static str {
    if active {
        "timeline-event active"
    } else {
        "timeline-event"
    }
}

fn panel_class(visible: bool) -> &'static str {
    if visible {
        "detail-panel timeline-detail"
    } else {
        "detail-panel timeline-detail hidden"
    }
}

#[component]
pub fn TimelineSection() -> Element {
    let state = use_exhibit_state();
    let viewport_class = use_viewport_class();
    let mut pending_scroll = use_pending_scroll();
    let mut timeline = state.timeline;

    let activate = use_callback(move |(index, activation): (EventIndex, Activation)| {
        let viewport = viewport_class.call(());
        let result = timeline.write().activate(index, activation, viewport);
        match result {
            Ok(transition) => pending_scroll.set(transition.scroll),
            Err(e) => fail_fast("timeline activation failed", &ExhibitError::from(e)),
        }
    });

    let (items, detail, visible) = {
        let controller = timeline.read();
        (
            controller.items(),
            controller.detail(),
            controller.is_panel_visible(),
        )
    };

    rsx! {
        section { id: section_ids::TIMELINE, class: "section timeline-section",
            h2 { class: "section-title", "Timeline" }
            p { class: "section-intro", "Select an event to read more about it." }

            div { class: "timeline-events",
                {items.into_iter().map(|item| {
                    let index = item.index;
                    rsx! {
                        div {
                            key: "{index}",
                            class: event_class(item.active),
                            role: "button",
                            tabindex: "0",
                            "aria-label": "{item.aria_label}",
                            "aria-pressed": "{item.active}",
                            onclick: move |_| activate.call((index, Activation::Pointer)),
                            onkeydown: move |evt: KeyboardEvent| {
                                handle_activation_key(&evt, || activate.call((index, Activation::Keyboard)));
                            },
                            div { class: "event-year", "{item.year}" }
                            div { class: "event-title", "{item.title}" }
                        }
                    }
                })}
            }

            div {
                id: element_ids::TIMELINE_DETAIL,
                class: panel_class(visible),
                role: "region",
                "aria-live": "polite",
                onclick: move |_| timeline.write().claim_click(),

                button {
                    class: "close-btn",
                    r#type: "button",
                    "aria-label": "Close details",
                    onclick: move |_| {
                        timeline.write().close();
                    },
                    "×"
                }
                if let Some(detail) = detail {
                    h3 { class: "detail-title", "{detail.title}" }
                    p { class: "detail-date", "{detail.year}" }
                    p { class: "detail-description", "{detail.description}" }
                }
            }
        }
    }
}
