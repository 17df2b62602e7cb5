//! Navigation Component
//!
//! Shared dashboard header: brand, welcome banner, logout.

use leptos::*;

use crate::actions;
use crate::state::session::SessionState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let current_user = state.current_user;
    let on_logout = move |_| {
        let state = state.clone();
        spawn_local(async move {
            actions::sign_out(state).await;
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🧳"</span>
                        <span class="text-xl font-bold text-white">"Lost & Found"</span>
                    </div>

                    // Welcome banner and logout
                    <div class="flex items-center space-x-4">
                        <span class="text-gray-300">
                            {move || current_user.get().map(|user| user.welcome_banner())}
                        </span>
                        <button
                            on:click=on_logout
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
