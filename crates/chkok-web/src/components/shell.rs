//! Shell layout: header, side navigation and the routed content region

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{A, Outlet, Redirect};

use crate::app::AppContext;
use crate::controllers::{logout, routes};

/// Frame around every authenticated page
///
/// Anonymous sessions are redirected to the login screen before anything
/// below the shell mounts.
#[component]
pub fn Shell() -> impl IntoView {
    let context = expect_context::<AppContext>();
    if !context.session.is_authenticated() {
        return view! { <Redirect path=routes::LOGIN /> }.into_any();
    }

    view! {
        <div class="shell">
            <SiteHeader />
            <div class="shell-body">
                <AppSidebar />
                <main class="content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn SiteHeader() -> impl IntoView {
    let context = expect_context::<AppContext>();

    let on_logout = move |_| {
        let context = context.clone();
        spawn_local(async move {
            logout(&context.client, &context.notifier, &context.navigator).await;
        });
    };

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <A href=routes::HOME>"체험콕 관리자"</A>
                </h1>
                <button class="btn btn-secondary" on:click=on_logout>
                    "로그아웃"
                </button>
            </div>
        </header>
    }
}

#[component]
fn AppSidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <nav class="nav">
                <A href=routes::HOME attr:class="nav-link">"대시보드"</A>
            </nav>
        </aside>
    }
}
