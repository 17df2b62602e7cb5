//! Item Renderers
//!
//! The admin item table and the user-facing item grid. Both take the
//! (possibly filtered) collection as a signal and rebuild their fragment from
//! it; empty collections render a placeholder instead of an empty container.

use leptos::*;

use crate::actions;
use crate::components::badge::StatusBadge;
use crate::state::models::Item;
use crate::state::session::SessionState;

/// Admin table of all item reports with a Remove control per row
#[component]
pub fn AdminItemTable(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead>
                <tr class="text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Image"</th>
                    <th class="py-2">"Item"</th>
                    <th class="py-2">"Status"</th>
                    <th class="py-2">"Reported By"</th>
                    <th class="py-2">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = items.get();
                    if items.is_empty() {
                        view! {
                            <tr>
                                <td colspan="5" class="py-4 text-gray-400">
                                    "No items reported yet."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        items.into_iter()
                            .map(|item| view! { <AdminItemRow item=item /> })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Single admin item row
#[component]
fn AdminItemRow(item: Item) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let id = item.id;
    let on_remove = move |_| {
        let state = state.clone();
        spawn_local(async move {
            actions::remove_item(state, id).await;
        });
    };

    view! {
        <tr class="border-b border-gray-700">
            <td class="py-2">
                <img src=item.image.clone() class="w-12 h-12 object-cover rounded" />
            </td>
            <td class="py-2">
                {item.name.clone()}
                <br />
                <small class="text-gray-400">{item.short_desc()}</small>
            </td>
            <td class="py-2">
                <StatusBadge status=item.status.clone() />
            </td>
            <td class="py-2">{item.reported_by.clone()}</td>
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

/// User-facing grid of item cards; Found items carry a Claim action
#[component]
pub fn ItemGrid(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    view! {
                        <div class="col-span-full text-center py-12">
                            <p class="text-gray-400">"No items reported yet."</p>
                        </div>
                    }.into_view()
                } else {
                    items.into_iter()
                        .map(|item| view! { <ItemCard item=item /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Single item card
#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let claimable = item.is_claimable();
    let id = item.id;
    let name = item.name.clone();
    let on_claim = move |_| {
        let state = state.clone();
        let name = name.clone();
        spawn_local(async move {
            actions::claim_item(state, id, name).await;
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <img src=item.image.clone() class="w-full h-40 object-cover" />
            <div class="p-4 space-y-2">
                <StatusBadge status=item.status.clone() />
                <h3 class="font-semibold">{item.name.clone()}</h3>
                <p class="text-gray-400 text-sm">{item.desc.clone()}</p>
                <div class="text-gray-500 text-xs">
                    {format!("Reported by: {} on {}", item.reported_by, item.date_reported)}
                </div>
                {claimable.then(|| view! {
                    <button
                        on:click=on_claim
                        class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Claim Item"
                    </button>
                })}
            </div>
        </div>
    }
}
