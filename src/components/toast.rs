//! Toast Notification Component
//!
//! Renders the auto-clearing success and error messages held in the session
//! state.

use leptos::*;

use crate::state::session::SessionState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|msg| view! {
                    <ToastMessage message=msg icon="✓" bg_class="bg-green-600" />
                })
            }}
            {move || {
                error.get().map(|msg| view! {
                    <ToastMessage message=msg icon="✕" bg_class="bg-red-600" />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)] message: String,
    icon: &'static str,
    bg_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
