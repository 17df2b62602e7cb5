//! App Root Component
//!
//! Provides the session context, probes the server session on startup, and
//! switches between the top-level views. Exactly one section is visible at a
//! time; the shared nav bar only renders on dashboard views.

use leptos::*;

use crate::actions;
use crate::components::{Nav, Toast};
use crate::pages::{AdminDashboard, LoginPage, SignupPage, UserDashboard};
use crate::state::session::{provide_session_state, SessionState, View};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components
    provide_session_state();

    let state = use_context::<SessionState>().expect("SessionState not found");

    // Restore the server-side session on load
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            actions::restore_session(state).await;
        });
    });

    let view_signal = state.view;

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Shared navigation bar, dashboards only
            {move || {
                matches!(view_signal.get(), View::AdminDashboard | View::UserDashboard)
                    .then(|| view! { <Nav /> })
            }}

            // Exactly one top-level section at a time
            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match view_signal.get() {
                    View::Login => view! { <LoginPage /> }.into_view(),
                    View::Signup => view! { <SignupPage /> }.into_view(),
                    View::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
                    View::UserDashboard => view! { <UserDashboard /> }.into_view(),
                }}
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
