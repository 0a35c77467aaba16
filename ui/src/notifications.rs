//! Notification widgets: the header bell with its unread badge and the
//! ambient delivery widget that fetches notifications and raises toasts.
//! Both read a shared signal provided by [`NotificationsProvider`].

use api::NotificationInfo;
use dioxus::prelude::*;

use crate::icons::FaBell;
use crate::toast::use_toast;
use crate::Icon;

/// Number of notifications not yet seen by the user.
pub fn unseen_count(notifications: &[NotificationInfo]) -> usize {
    notifications.iter().filter(|n| !n.seen).count()
}

/// Get the shared notification list.
pub fn use_notifications() -> Signal<Vec<NotificationInfo>> {
    use_context::<Signal<Vec<NotificationInfo>>>()
}

/// Provides the shared notification list to the subtree. Must sit above the
/// [`NotificationBell`] and the [`NotificationSystem`].
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Vec::<NotificationInfo>::new()));

    rsx! {
        {children}
    }
}

/// Bell icon with an unread badge. Opening the panel marks everything seen.
#[component]
pub fn NotificationBell() -> Element {
    let mut notifications = use_notifications();
    let mut open = use_signal(|| false);
    let count = unseen_count(&notifications());

    let toggle = move |_| {
        let was_open = open();
        open.set(!was_open);
        if !was_open && unseen_count(&notifications()) > 0 {
            spawn(async move {
                if let Err(e) = api::mark_notifications_seen().await {
                    tracing::warn!("Failed to mark notifications seen: {e}");
                }
                for n in notifications.write().iter_mut() {
                    n.seen = true;
                }
            });
        }
    };

    rsx! {
        div {
            class: "notification-bell",
            button {
                class: "icon-button",
                title: "Notifications",
                onclick: toggle,
                Icon { icon: FaBell, width: 20, height: 20 }
                if count > 0 {
                    span { class: "notification-badge", "{count}" }
                }
            }

            if open() {
                div {
                    class: "notification-panel",
                    if notifications().is_empty() {
                        p { class: "notification-empty", "No notifications yet" }
                    } else {
                        for n in notifications() {
                            div {
                                key: "{n.id}",
                                class: "notification-item",
                                span { class: "notification-title", "{n.title}" }
                                if let Some(ref body) = n.body {
                                    span { class: "notification-body", "{body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ambient delivery widget: fetches the notification list once on mount,
/// publishes it to the shared signal, and raises a toast per unseen entry.
/// Renders nothing itself.
#[component]
pub fn NotificationSystem() -> Element {
    let mut notifications = use_notifications();
    let mut toast = use_toast();

    let _ = use_resource(move || async move {
        match api::list_notifications().await {
            Ok(list) => {
                for n in list.iter().filter(|n| !n.seen) {
                    toast.info(n.title.clone());
                }
                notifications.set(list);
            }
            Err(e) => {
                tracing::debug!("Notification fetch failed: {e}");
            }
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, seen: bool) -> NotificationInfo {
        NotificationInfo {
            id: id.to_string(),
            title: "Budget exceeded".to_string(),
            body: None,
            seen,
        }
    }

    #[test]
    fn test_unseen_count() {
        let list = vec![
            notification("a", false),
            notification("b", true),
            notification("c", false),
        ];
        assert_eq!(unseen_count(&list), 2);
    }

    #[test]
    fn test_unseen_count_empty() {
        assert_eq!(unseen_count(&[]), 0);
    }

    #[test]
    fn test_all_seen_clears_count() {
        let mut list = vec![notification("a", false), notification("b", false)];
        for n in list.iter_mut() {
            n.seen = true;
        }
        assert_eq!(unseen_count(&list), 0);
    }
}
