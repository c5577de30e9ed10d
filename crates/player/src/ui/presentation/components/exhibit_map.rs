//! Map section: Leaflet map, marker keyboard proxies and detail panel

use dioxus::prelude::*;
use exhibit_domain::LocationIndex;

use super::section_ids;
use crate::application::{element_ids, MapTransition};
use crate::error::{fail_fast, ExhibitError};
use crate::infrastructure::LeafletBridge;
use crate::ports::outbound::MapError;
use crate::ui::presentation::keyboard::handle_activation_key;
use crate::ui::presentation::state::{
    use_exhibit_state, use_pending_scroll, use_viewport_class,
};
use crate::ui::use_platform;

fn proxy_class(active: bool) -> &'static str {
    if active {
        "map-location active"
    } else {
        "map-location"
    }
}

fn panel_class(visible: bool) -> &'static str {
    if visible {
        "detail-panel map-detail"
    } else {
        "detail-panel map-detail hidden"
    }
}

#[component]
pub fn MapSection() -> Element {
    let state = use_exhibit_state();
    let platform = use_platform();
    let viewport_class = use_viewport_class();
    let mut pending_scroll = use_pending_scroll();
    let mut map = state.map;
    let mut bridge = use_signal(|| None::<LeafletBridge>);

    // Highlight follows the selection; the scroll waits for the next render.
    let apply = use_callback(move |transition: MapTransition| {
        if let Some(port) = bridge.read().as_ref() {
            if let Err(e) = map.read().apply_highlight(port, &transition) {
                fail_fast("marker highlight failed", &ExhibitError::from(e));
            }
        }
        pending_scroll.set(transition.scroll);
    });

    let select = use_callback(move |index: LocationIndex| {
        let viewport = viewport_class.call(());
        let result = map.write().select(index, viewport);
        match result {
            Ok(transition) => apply.call(transition),
            Err(e) => fail_fast("map selection failed", &ExhibitError::from(e)),
        }
    });

    let close = use_callback(move |()| {
        let transition = map.write().close();
        if let Some(transition) = transition {
            apply.call(transition);
        }
    });

    let on_mounted = move |_: MountedEvent| {
        let container_id = map.read().config().container_id.clone();
        if !platform.has_element(&container_id) {
            let error = MapError::MissingContainer(container_id);
            fail_fast("map mount failed", &ExhibitError::from(error));
        }

        let (port, mut events) = LeafletBridge::start();
        let rendered = map.read().render(&port);
        match rendered {
            Ok(rendered) => tracing::debug!(
                markers = rendered.marker_count,
                bounds = ?rendered.bounds,
                "map markers placed"
            ),
            Err(e) => fail_fast("map render failed", &ExhibitError::from(e)),
        }
        bridge.set(Some(port));

        spawn(async move {
            loop {
                let event = match events.next().await {
                    Ok(event) => event,
                    Err(e) => fail_fast("map driver disconnected", &ExhibitError::from(e)),
                };
                tracing::trace!(?event, "map event");

                let viewport = viewport_class.call(());
                let result = map.write().handle_event(&event, viewport);
                match result {
                    Ok(Some(transition)) => apply.call(transition),
                    Ok(None) => {}
                    Err(e) => fail_fast("map driver fault", &e),
                }
            }
        });
    };

    let (container_id, proxies, detail, visible) = {
        let controller = map.read();
        (
            controller.config().container_id.clone(),
            controller.proxies(),
            controller.detail(),
            controller.is_panel_visible(),
        )
    };

    rsx! {
        section { id: section_ids::MAP, class: "section map-section",
            h2 { class: "section-title", "Places" }
            p { class: "section-intro",
                "Select a marker, or one of the places listed below the map, to read about it."
            }

            div { class: "map-layout",
                div {
                    id: "{container_id}",
                    class: "map-container",
                    role: "application",
                    "aria-label": "Map of colonial-era locations",
                    onmounted: on_mounted,
                }

                div {
                    id: element_ids::MAP_DETAIL,
                    class: panel_class(visible),
                    role: "region",
                    "aria-live": "polite",

                    button {
                        class: "close-btn",
                        r#type: "button",
                        "aria-label": "Close details",
                        onclick: move |_| close.call(()),
                        "×"
                    }
                    if let Some(detail) = detail {
                        h3 { class: "detail-title", "{detail.name}" }
                        p { class: "detail-description", "{detail.description}" }
                    }
                }
            }

            ul { class: "map-locations", "aria-label": "Locations on the map",
                {proxies.into_iter().map(|proxy| {
                    let index = proxy.index;
                    rsx! {
                        li { key: "{index}",
                            div {
                                class: proxy_class(proxy.active),
                                role: "button",
                                tabindex: "0",
                                "aria-pressed": "{proxy.active}",
                                onclick: move |_| select.call(index),
                                onkeydown: move |evt: KeyboardEvent| {
                                    handle_activation_key(&evt, || select.call(index));
                                },
                                "{proxy.name}"
                            }
                        }
                    }
                })}
            }
        }
    }
}
