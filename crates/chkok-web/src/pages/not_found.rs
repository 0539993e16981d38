//! 404 Not Found page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::controllers::routes;

/// Shown for any unknown route
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"페이지를 찾을 수 없습니다"</h2>
            <A href=routes::HOME attr:class="btn btn-primary">"대시보드로 돌아가기"</A>
        </div>
    }
}
