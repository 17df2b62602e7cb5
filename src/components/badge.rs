//! Status Badge Component
//!
//! Colored pill for item and claim statuses.

use leptos::*;

/// Badge color by status; unknown statuses stay neutral
fn status_color(status: &str) -> &'static str {
    match status {
        "Lost" => "bg-red-500",
        "Found" => "bg-green-500",
        "Returned" => "bg-blue-500",
        "Claimed" => "bg-purple-500",
        "pending" => "bg-yellow-500",
        "approved" => "bg-green-500",
        "rejected" => "bg-red-500",
        _ => "bg-gray-500",
    }
}

/// Status pill
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let color = status_color(&status);

    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", color)>
            {status}
        </span>
    }
}
