//! Admin Dashboard
//!
//! Tabbed admin view: manage users, manage items (with search), pending
//! admin requests, read-only user information, and claim review. The user
//! information and claims tabs fetch their data on entry, never before.

use leptos::*;

use crate::actions;
use crate::components::{
    AdminItemTable, PendingAdminTable, PendingClaimsTable, UserInfoCards, UserTable,
};
use crate::state::models::filter_items_admin;
use crate::state::session::{AdminTab, SessionState};

/// Admin dashboard page
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let tab = state.admin_tab;
    let users = state.users;
    let pending_admins = state.pending_admins;
    let pending_claims = state.pending_claims;

    // Items pane shows the fetched list filtered by the search box
    let items = state.items;
    let (search, set_search) = create_signal(String::new());
    let filtered_items = Signal::derive(move || filter_items_admin(&items.get(), &search.get()));

    view! {
        <div class="flex gap-8">
            // Sidebar tabs
            <aside class="w-48 shrink-0 space-y-1">
                <TabButton tab=AdminTab::Users label="Manage Users" />
                <TabButton tab=AdminTab::Items label="Manage Items" />
                <TabButton tab=AdminTab::PendingAdmins label="Admin Requests" />
                <TabButton tab=AdminTab::UserInfo label="User Information" />
                <TabButton tab=AdminTab::Claims label="Claims" />
            </aside>

            // Active pane
            <div class="flex-1 bg-gray-800 rounded-xl p-6">
                {move || match tab.get() {
                    AdminTab::Users => view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Registered Users"</h2>
                            <UserTable users=users />
                        </section>
                    }.into_view(),
                    AdminTab::Items => view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Item Reports"</h2>
                            <input
                                type="text"
                                placeholder="Search by name, description, or status"
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 mb-4
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <AdminItemTable items=filtered_items />
                        </section>
                    }.into_view(),
                    AdminTab::PendingAdmins => view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Pending Admin Requests"</h2>
                            <PendingAdminTable users=pending_admins />
                        </section>
                    }.into_view(),
                    AdminTab::UserInfo => view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"User Information"</h2>
                            <UserInfoCards users=users />
                        </section>
                    }.into_view(),
                    AdminTab::Claims => view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Pending Claims"</h2>
                            <PendingClaimsTable claims=pending_claims />
                        </section>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Sidebar tab button. Switching marks the button active and loads the data
/// of the lazy tabs on entry.
#[component]
fn TabButton(tab: AdminTab, label: &'static str) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let current = state.admin_tab;
    let on_click = move |_| {
        current.set(tab);

        let state = state.clone();
        match tab {
            AdminTab::UserInfo => spawn_local(async move {
                actions::load_user_information(&state).await;
            }),
            AdminTab::Claims => spawn_local(async move {
                actions::load_pending_claims(&state).await;
            }),
            _ => {}
        }
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "w-full text-left px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == tab {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </button>
    }
}
