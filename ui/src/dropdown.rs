//! Small dropdown menu: a trigger button, a click-away overlay, and an
//! anchored panel. Items close the menu before running their handler.

use dioxus::prelude::*;

/// Open/closed state shared with [`DropdownItem`] children via context.
#[derive(Clone, Copy)]
struct DropdownState {
    open: Signal<bool>,
}

/// Menu anchored to its trigger. The trigger element is rendered inside a
/// button that toggles the panel; clicking anywhere else closes it.
#[component]
pub fn DropdownMenu(
    trigger: Element,
    #[props(default = "".to_string())] label: String,
    children: Element,
) -> Element {
    let open = use_signal(|| false);
    let mut state = use_context_provider(|| DropdownState { open });

    rsx! {
        div {
            class: "dropdown",
            button {
                class: "icon-button",
                onclick: move |_| {
                    let was_open = (state.open)();
                    state.open.set(!was_open);
                },
                {trigger}
            }

            if (state.open)() {
                // Click-away layer under the panel
                div {
                    class: "dropdown-overlay",
                    onclick: move |_| state.open.set(false),
                }
                div {
                    class: "dropdown-panel",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    if !label.is_empty() {
                        div { class: "dropdown-label", "{label}" }
                        div { class: "dropdown-separator" }
                    }
                    {children}
                }
            }
        }
    }
}

/// A single menu entry. Closes the menu, then invokes the handler.
#[component]
pub fn DropdownItem(onclick: EventHandler<()>, children: Element) -> Element {
    let mut state = use_context::<DropdownState>();

    rsx! {
        button {
            class: "dropdown-item",
            onclick: move |_| {
                state.open.set(false);
                onclick.call(());
            },
            {children}
        }
    }
}

/// Thin horizontal rule between groups of items.
#[component]
pub fn DropdownSeparator() -> Element {
    rsx! {
        div { class: "dropdown-separator" }
    }
}
