//! Toast notifications

use leptos::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::controllers::{Notifier, Toast};

/// Oldest toasts are dropped beyond this
const MAX_VISIBLE: usize = 5;

/// A toast with a stable key for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    /// Unique per notifier
    pub id: u64,
    /// The notification
    pub toast: Toast,
}

/// [`Notifier`] backed by a reactive list rendered by [`ToastHost`]
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: Arc<AtomicU64>,
}

impl ToastNotifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Currently visible toasts
    pub const fn entries(&self) -> RwSignal<Vec<ToastEntry>> {
        self.entries
    }

    /// Remove one toast
    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|e| e.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.update(|entries| {
            entries.push(ToastEntry { id, toast });
            let overflow = entries.len().saturating_sub(MAX_VISIBLE);
            entries.drain(..overflow);
        });
    }
}

/// Renders the notifier's toasts; click one to dismiss it
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let entries = notifier.entries();

    view! {
        <div class="toast-container">
            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let notifier = notifier.clone();
                    let id = entry.id;
                    view! {
                        <div
                            class=entry.toast.level.css_class()
                            role="alert"
                            on:click=move |_| notifier.dismiss(id)
                        >
                            {entry.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notifier_keeps_newest_toasts() {
        Owner::new().with(|| {
            let notifier = ToastNotifier::new();
            for n in 0..7 {
                notifier.notify(Toast::info(format!("toast {n}")));
            }

            let ids: Vec<u64> = notifier
                .entries()
                .get_untracked()
                .iter()
                .map(|e| e.id)
                .collect();
            assert_eq!(ids, vec![2, 3, 4, 5, 6]);
        });
    }

    #[test]
    fn test_dismiss_removes_one_toast() {
        Owner::new().with(|| {
            let notifier = ToastNotifier::new();
            notifier.notify(Toast::error("first"));
            notifier.notify(Toast::success("second"));

            notifier.dismiss(0);

            let remaining = notifier.entries().get_untracked();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining.first().map(|e| e.toast.message.as_str()), Some("second"));
        });
    }
}
