//! Theme accordion

use dioxus::prelude::*;
use exhibit_domain::CardIndex;

use super::section_ids;
use crate::error::{fail_fast, ExhibitError};
use crate::ui::presentation::keyboard::handle_activation_key;
use crate::ui::presentation::state::{
    use_exhibit_state, use_pending_scroll, use_viewport_class,
};

#[component]
pub fn ThemesSection() -> Element {
    let state = use_exhibit_state();
    let viewport_class = use_viewport_class();
    let mut pending_scroll = use_pending_scroll();
    let mut themes = state.themes;

    let toggle = use_callback(move |card: CardIndex| {
        let viewport = viewport_class.call(());
        let result = themes.write().toggle(card, viewport);
        match result {
            Ok(transition) => pending_scroll.set(transition.scroll),
            Err(e) => fail_fast("theme card toggle failed", &ExhibitError::from(e)),
        }
    });

    let cards = themes.read().cards();

    rsx! {
        section { id: section_ids::THEMES, class: "section themes-section",
            h2 { class: "section-title", "Themes" }
            div { class: "theme-cards",
                {cards.into_iter().map(|card| {
                    let index = card.index;
                    let body_id = format!("{}-body", card.element_id);
                    rsx! {
                        article {
                            key: "{index}",
                            id: "{card.element_id}",
                            class: if card.expanded { "theme-card expanded" } else { "theme-card" },

                            div {
                                class: "theme-card-header",
                                role: "button",
                                tabindex: "0",
                                "aria-expanded": "{card.expanded}",
                                "aria-controls": "{body_id}",
                                onclick: move |_| toggle.call(index),
                                onkeydown: move |evt: KeyboardEvent| {
                                    handle_activation_key(&evt, || toggle.call(index));
                                },
                                h3 { class: "theme-card-title", "{card.title}" }
                                p { class: "theme-card-summary", "{card.summary}" }
                                span { class: "theme-card-indicator", if card.expanded { "−" } else { "+" } }
                            }

                            div {
                                id: "{body_id}",
                                class: if card.expanded { "theme-card-body" } else { "theme-card-body hidden" },
                                for (i, paragraph) in card.body.iter().enumerate() {
                                    p { key: "{i}", "{paragraph}" }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
