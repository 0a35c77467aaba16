//! Toast notifications: a context-provided queue plus the overlay that
//! renders it. Pages and widgets grab a [`ToastHandle`] via [`use_toast`]
//! and push messages; the [`Toaster`] overlay lives once in the page frame.

use dioxus::prelude::*;

/// Severity of a toast, selects its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Info => "toast toast--info",
        }
    }
}

/// A single queued toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Remove a toast by id, keeping the rest in order.
fn remove_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|t| t.id != id);
}

/// Copyable handle for pushing and dismissing toasts.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastHandle {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            let id = *next;
            *next += 1;
            id
        };
        self.toasts.write().push(Toast {
            id,
            level,
            message: message.into(),
        });

        // Auto-dismiss after a few seconds on the web; on the server the
        // queue only lives for one render anyway.
        #[cfg(target_arch = "wasm32")]
        {
            let mut toasts = self.toasts;
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                remove_toast(&mut toasts.write(), id);
            });
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        remove_toast(&mut self.toasts.write(), id);
    }
}

/// Get the toast handle provided by [`ToastProvider`].
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Provides the toast queue to the subtree. Must sit above every
/// [`use_toast`] caller and the [`Toaster`] overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastHandle { toasts, next_id });

    rsx! {
        {children}
    }
}

/// Fixed overlay rendering the queued toasts.
#[component]
pub fn Toaster() -> Element {
    let mut handle = use_toast();
    let toasts = (handle.toasts)();

    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toaster",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| handle.dismiss(id)
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, message: &str) -> Toast {
        Toast {
            id,
            level: ToastLevel::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut queue = vec![toast(0, "a"), toast(1, "b"), toast(2, "c")];
        remove_toast(&mut queue, 1);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].message, "a");
        assert_eq!(queue[1].message, "c");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut queue = vec![toast(0, "a")];
        remove_toast(&mut queue, 99);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_level_classes_are_distinct() {
        assert_ne!(ToastLevel::Success.class(), ToastLevel::Error.class());
        assert_ne!(ToastLevel::Error.class(), ToastLevel::Info.class());
    }
}
