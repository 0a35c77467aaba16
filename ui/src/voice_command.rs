//! Floating voice-command widget. A mic button toggles a small panel where a
//! spoken (or typed, as the portable fallback) phrase is submitted; the raw
//! phrase is handed to the host through `on_command`, which owns the mapping
//! to navigation.

use dioxus::prelude::*;

use crate::icons::FaMicrophone;
use crate::Icon;

#[component]
pub fn VoiceCommand(on_command: EventHandler<String>) -> Element {
    let mut open = use_signal(|| false);
    let mut phrase = use_signal(String::new);

    // Re-bind the signals inside so the closure stays `Fn` and can be
    // shared by the keydown and click handlers.
    let submit = move || {
        let mut phrase = phrase;
        let mut open = open;
        let text = phrase().trim().to_lowercase();
        if text.is_empty() {
            return;
        }
        tracing::debug!("Voice command: {text}");
        phrase.set(String::new());
        open.set(false);
        on_command.call(text);
    };

    rsx! {
        div {
            class: "voice-command",
            if open() {
                div {
                    class: "voice-command-panel",
                    p { class: "voice-command-hint", "Say where to go, e.g. \"reports\"" }
                    input {
                        class: "voice-command-input",
                        r#type: "text",
                        placeholder: "home, groups, debts...",
                        value: phrase(),
                        oninput: move |evt: FormEvent| phrase.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                    button {
                        class: "voice-command-go",
                        onclick: move |_| submit(),
                        "Go"
                    }
                }
            }
            button {
                class: if open() { "voice-command-toggle listening" } else { "voice-command-toggle" },
                title: "Voice command",
                onclick: move |_| open.set(!open()),
                Icon { icon: FaMicrophone, width: 18, height: 18 }
            }
        }
    }
}
