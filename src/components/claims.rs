//! Claim Renderers
//!
//! The user's own-claims table and the admin review table for pending claims.

use leptos::*;

use crate::actions;
use crate::api::ClaimDecision;
use crate::components::badge::StatusBadge;
use crate::state::models::Claim;
use crate::state::session::SessionState;

/// Table of the signed-in user's claims
#[component]
pub fn MyClaimsTable(#[prop(into)] claims: Signal<Vec<Claim>>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead>
                <tr class="text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Item"</th>
                    <th class="py-2">"Description"</th>
                    <th class="py-2">"Status"</th>
                    <th class="py-2">"Submitted"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let claims = claims.get();
                    if claims.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4" class="py-4 text-gray-400">
                                    "No claims submitted yet."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        claims.into_iter().map(|claim| view! {
                            <tr class="border-b border-gray-700">
                                <td class="py-2">{claim.item_name.clone()}</td>
                                <td class="py-2">{claim.claim_description.clone()}</td>
                                <td class="py-2">
                                    <StatusBadge status=claim.status.clone() />
                                </td>
                                <td class="py-2">{claim.date_submitted.clone()}</td>
                            </tr>
                        }).collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Admin review table of pending claims with Approve and Reject per row
#[component]
pub fn PendingClaimsTable(#[prop(into)] claims: Signal<Vec<Claim>>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead>
                <tr class="text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Item"</th>
                    <th class="py-2">"Claimant"</th>
                    <th class="py-2">"Description"</th>
                    <th class="py-2">"Status"</th>
                    <th class="py-2">"Submitted"</th>
                    <th class="py-2">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let claims = claims.get();
                    if claims.is_empty() {
                        view! {
                            <tr>
                                <td colspan="6" class="py-4 text-gray-400">
                                    "No pending claims."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        claims.into_iter()
                            .map(|claim| view! { <PendingClaimRow claim=claim /> })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Single pending-claim row
#[component]
fn PendingClaimRow(claim: Claim) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let id = claim.id;
    let state_for_approve = state.clone();
    let on_approve = move |_| {
        let state = state_for_approve.clone();
        spawn_local(async move {
            actions::decide_claim(state, ClaimDecision::Approve, id).await;
        });
    };
    let on_reject = move |_| {
        let state = state.clone();
        spawn_local(async move {
            actions::decide_claim(state, ClaimDecision::Reject, id).await;
        });
    };

    view! {
        <tr class="border-b border-gray-700">
            <td class="py-2">{claim.item_name.clone()}</td>
            <td class="py-2">{claim.claimant_name.clone()}</td>
            <td class="py-2">{claim.claim_description.clone()}</td>
            <td class="py-2">
                <StatusBadge status=claim.status.clone() />
            </td>
            <td class="py-2">{claim.date_submitted.clone()}</td>
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
