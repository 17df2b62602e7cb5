//! User Renderers
//!
//! Admin-side views over the account list: the manage-users table, the
//! read-only user information cards, and the pending-admins table.

use leptos::*;

use crate::actions;
use crate::state::models::User;
use crate::state::session::SessionState;

/// Admin table of all accounts with a Remove control per row
#[component]
pub fn UserTable(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead>
                <tr class="text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Name"</th>
                    <th class="py-2">"Username"</th>
                    <th class="py-2">"Type"</th>
                    <th class="py-2">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let users = users.get();
                    if users.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4" class="py-4 text-gray-400">
                                    "No registered users."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        users.into_iter()
                            .map(|user| view! { <UserRow user=user /> })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Single account row
#[component]
fn UserRow(user: User) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let username = user.username.clone();
    let on_remove = move |_| {
        let state = state.clone();
        let username = username.clone();
        spawn_local(async move {
            actions::remove_user(state, username).await;
        });
    };

    view! {
        <tr class="border-b border-gray-700">
            <td class="py-2">{user.full_name()}</td>
            <td class="py-2">{user.username.clone()}</td>
            <td class="py-2">{user.kind.to_string()}</td>
            <td class="py-2">
                <button
                    on:click=on_remove
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

/// Read-only account cards for the admin user-information tab
#[component]
pub fn UserInfoCards(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-4">
            {move || {
                let users = users.get();
                if users.is_empty() {
                    view! {
                        <div class="col-span-full text-center py-12">
                            <p class="text-gray-400">"No registered users."</p>
                        </div>
                    }.into_view()
                } else {
                    users.into_iter().map(|user| view! {
                        <div class="bg-gray-700 rounded-lg p-4 space-y-1">
                            <h3 class="font-semibold">{user.full_name()}</h3>
                            <p class="text-sm text-gray-300">
                                <strong>"Username: "</strong>{user.username.clone()}
                            </p>
                            <p class="text-sm text-gray-300">
                                <strong>"Email: "</strong>{user.email.clone()}
                            </p>
                            <p class="text-sm text-gray-300">
                                <strong>"Type: "</strong>{user.kind.to_string()}
                            </p>
                        </div>
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Accounts awaiting admin elevation, with Approve and Reject controls
#[component]
pub fn PendingAdminTable(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead>
                <tr class="text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Name"</th>
                    <th class="py-2">"Username"</th>
                    <th class="py-2">"Email"</th>
                    <th class="py-2">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let users = users.get();
                    if users.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4" class="py-4 text-gray-400">
                                    "No pending admin requests."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        users.into_iter()
                            .map(|user| view! { <PendingAdminRow user=user /> })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Single pending-admin row. Reject reuses the generic user-removal command.
#[component]
fn PendingAdminRow(user: User) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let approve_username = user.username.clone();
    let state_for_approve = state.clone();
    let on_approve = move |_| {
        let state = state_for_approve.clone();
        let username = approve_username.clone();
        spawn_local(async move {
            actions::approve_admin(state, username).await;
        });
    };

    let reject_username = user.username.clone();
    let on_reject = move |_| {
        let state = state.clone();
        let username = reject_username.clone();
        spawn_local(async move {
            actions::remove_user(state, username).await;
        });
    };

    view! {
        <tr class="border-b border-gray-700">
            <td class="py-2">{user.full_name()}</td>
            <td class="py-2">{user.username.clone()}</td>
            <td class="py-2">{user.email.clone()}</td>
            <td class="py-2 space-x-2">
                <button
                    on:click=on_approve
                    class="px-3 py-1 bg-green-600 hover:bg-green-700 rounded text-sm transition-colors"
                >
                    "Approve"
                </button>
                <button
                    on:click=on_reject
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                >
                    "Reject"
                </button>
            </td>
        </tr>
    }
}
