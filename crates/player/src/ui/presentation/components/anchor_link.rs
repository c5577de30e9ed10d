//! Same-page link with smooth scrolling

use dioxus::prelude::*;

use crate::application::follow_anchor;
use crate::ui::use_platform;

/// Link that smooth-scrolls to its `#target` when the target exists.
///
/// The bare `#` and links to missing targets keep their default behavior.
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    #[props(default, into)] class: String,
    onnavigate: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let platform = use_platform();
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if follow_anchor(&target, &platform) {
                    evt.prevent_default();
                }
                if let Some(handler) = &onnavigate {
                    handler.call(());
                }
            },
            {children}
        }
    }
}
