//! Loading component for displaying loading states

use leptos::prelude::*;

/// Pulse loader shown while a fetch is outstanding
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="pulse-loader">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
