//! Login page

use chkok_core::{Credentials, messages};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::app::AppContext;
use crate::controllers::LoginPhase;

/// Email and password form
#[component]
pub fn LoginPage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(LoginPhase::Idle);

    // The last phase can arrive after the page is gone.
    let controller = Arc::new(context.login_controller().with_phase_listener(move |next| {
        _ = phase.try_set(next);
    }));

    let on_submit = {
        let controller = Arc::clone(&controller);
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let controller = Arc::clone(&controller);
            let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
            spawn_local(async move {
                controller.submit(credentials).await;
            });
        }
    };
    on_cleanup(move || controller.teardown());

    let submitting = move || phase.get() == LoginPhase::Submitting;

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h2>"체험콕 관리자 로그인"</h2>
                <label for="email">"이메일"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="chkok@example.com"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="password">"비밀번호"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || {
                        if submitting() { messages::LOGIN_IN_PROGRESS } else { messages::LOGIN_IDLE }
                    }}
                </button>
            </form>
        </div>
    }
}
