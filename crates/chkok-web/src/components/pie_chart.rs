//! User statistics pie chart

use chkok_core::{ChartRecord, pie_slices};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::app::AppContext;
use crate::components::Loading;
use crate::controllers::PanelState;

const VIEW_BOX: f64 = 200.0;
const RADIUS: f64 = 80.0;

/// Statistics card: spinner while loading, chart once loaded, nothing on failure
#[component]
pub fn UserPieChart() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let state = RwSignal::new(PanelState::Idle);

    let controller = Arc::new(
        context
            .stats_panel_controller()
            .with_state_listener(move |next| state.set(next.clone())),
    );

    let mounted = Arc::clone(&controller);
    spawn_local(async move {
        mounted.mount().await;
    });
    on_cleanup(move || controller.unmount());

    move || match state.get() {
        PanelState::Idle | PanelState::Loading => view! { <Loading /> }.into_any(),
        PanelState::Loaded { records, .. } => view! { <PieChartCard records=records /> }.into_any(),
        PanelState::Failed(_) => ().into_any(),
    }
}

#[component]
fn PieChartCard(records: [ChartRecord; 5]) -> impl IntoView {
    let center = VIEW_BOX / 2.0;
    let slices = pie_slices(&records)
        .into_iter()
        .map(|slice| {
            let path = slice.svg_path(center, center, RADIUS);
            view! {
                <path d=path fill=slice.record.color_token>
                    <title>{format!("{}: {}", slice.record.category, slice.record.value)}</title>
                </path>
            }
        })
        .collect_view();

    let legend = records
        .into_iter()
        .map(|record| {
            view! {
                <li class="legend-item">
                    <span
                        class="legend-swatch"
                        style=format!("background-color: {}", record.color_token)
                    ></span>
                    <span class="legend-label">{record.category.label()}</span>
                    <span class="legend-value">{record.value}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-card chart-card">
            <h3>"사용자 통계"</h3>
            <svg
                class="pie-chart"
                viewBox=format!("0 0 {VIEW_BOX} {VIEW_BOX}")
                role="img"
            >
                {slices}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}
