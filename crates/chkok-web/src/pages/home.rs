//! Landing page after login

use leptos::prelude::*;

use crate::components::UserPieChart;

/// Dashboard hosting the statistics panel
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <div class="dashboard-grid">
                <UserPieChart />
            </div>
        </div>
    }
}
