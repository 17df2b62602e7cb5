//! User Dashboard
//!
//! Tabbed user view: the item grid with search and claiming, the report-item
//! form with a local image preview, the signed-in user's claims, and the
//! profile editor. The claims tab fetches on entry; the profile tab reads
//! from session state.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::api::ProfileUpdate;
use crate::components::{ItemGrid, MyClaimsTable};
use crate::state::models::filter_items_user;
use crate::state::session::{SessionState, UserTab};

/// User dashboard page
#[component]
pub fn UserDashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let tab = state.user_tab;

    view! {
        <div class="flex gap-8">
            // Sidebar tabs
            <aside class="w-48 shrink-0 space-y-1">
                <TabButton tab=UserTab::ViewItems label="View Items" />
                <TabButton tab=UserTab::ReportItem label="Report Item" />
                <TabButton tab=UserTab::MyClaims label="My Claims" />
                <TabButton tab=UserTab::Profile label="Profile" />
            </aside>

            // Active pane
            <div class="flex-1 bg-gray-800 rounded-xl p-6">
                {move || match tab.get() {
                    UserTab::ViewItems => view! { <ViewItemsPane /> }.into_view(),
                    UserTab::ReportItem => view! { <ReportItemPane /> }.into_view(),
                    UserTab::MyClaims => view! { <MyClaimsPane /> }.into_view(),
                    UserTab::Profile => view! { <ProfilePane /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Sidebar tab button; the claims tab loads its data on entry
#[component]
fn TabButton(tab: UserTab, label: &'static str) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let current = state.user_tab;
    let on_click = move |_| {
        current.set(tab);

        if tab == UserTab::MyClaims {
            let state = state.clone();
            spawn_local(async move {
                actions::load_my_claims(&state).await;
            });
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

/// Item grid with the client-side search box
#[component]
fn ViewItemsPane() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let items = state.items;
    let (search, set_search) = create_signal(String::new());
    let filtered = Signal::derive(move || filter_items_user(&items.get(), &search.get()));

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-4">"Reported Items"</h2>
            <input
                type="text"
                placeholder="Search by name or description"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 mb-4
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <ItemGrid items=filtered />
        </section>
    }
}

/// Report-item form with a local image preview. The photo is only read
/// locally until submit; the upload happens as part of the report.
#[component]
fn ReportItemPane() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (status, set_status) = create_signal("Lost".to_string());
    let (name, set_name) = create_signal(String::new());
    let (desc, set_desc) = create_signal(String::new());
    let (image, set_image) = create_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_image.set(Some(file.clone()));

        let reader = web_sys::FileReader::new().unwrap();
        let onload = {
            let reader = reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(result) = reader.result() {
                    if let Some(data_url) = result.as_string() {
                        set_preview.set(Some(data_url));
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = reader.read_as_data_url(&file);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let s = status.get();
        let n = name.get();
        let d = desc.get();
        let file = image.get();
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            if actions::report_item(state, s, n, d, file).await {
                set_status.set("Lost".to_string());
                set_name.set(String::new());
                set_desc.set(String::new());
                set_image.set(None);
                set_preview.set(None);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-4">"Report an Item"</h2>

            <form on:submit=on_submit class="space-y-4 max-w-lg">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                    <select
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                        prop:value=move || status.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="Lost">"Lost"</option>
                        <option value="Found">"Found"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Item name"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <textarea
                        required
                        prop:value=move || desc.get()
                        on:input=move |ev| set_desc.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 h-24
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Photo (optional)"</label>
                    <input
                        type="file"
                        accept="image/*"
                        on:change=on_file_change
                        class="w-full text-sm text-gray-400"
                    />
                </div>

                // Local preview of the selected photo
                {move || preview.get().map(|src| view! {
                    <img src=src class="w-full max-h-64 object-contain rounded-lg" />
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
                </button>
            </form>
        </section>
    }
}

/// The signed-in user's claims
#[component]
fn MyClaimsPane() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-4">"My Claims"</h2>
            <MyClaimsTable claims=state.my_claims />
        </section>
    }
}

/// Profile viewer/editor pre-populated from session state; the password field
/// always starts blank. On success the form reloads from the locally patched
/// session user.
#[component]
fn ProfilePane() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let user = match state.current_user.get_untracked() {
        Some(user) => user,
        None => {
            return view! {
                <p class="text-gray-400">"Not signed in."</p>
            }
            .into_view()
        }
    };

    let (fname, set_fname) = create_signal(user.fname.clone());
    let (mname, set_mname) = create_signal(user.mname.clone());
    let (lname, set_lname) = create_signal(user.lname.clone());
    let (email, set_email) = create_signal(user.email.clone());
    let (username, set_username) = create_signal(user.username.clone());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = ProfileUpdate::new(
            &fname.get(),
            &mname.get(),
            &lname.get(),
            &email.get(),
            &username.get(),
            &password.get(),
        );
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            if actions::update_profile(state.clone(), update).await {
                // Reload the form from the patched session state
                if let Some(user) = state.current_user.get_untracked() {
                    set_fname.set(user.fname);
                    set_mname.set(user.mname);
                    set_lname.set(user.lname);
                    set_email.set(user.email);
                    set_username.set(user.username);
                }
                set_password.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-4">"Profile"</h2>

            <form on:submit=on_submit class="space-y-4 max-w-lg">
                <div class="grid grid-cols-3 gap-2">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"First name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || fname.get()
                            on:input=move |ev| set_fname.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Middle"</label>
                        <input
                            type="text"
                            prop:value=move || mname.get()
                            on:input=move |ev| set_mname.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Last name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || lname.get()
                            on:input=move |ev| set_lname.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"New password"</label>
                    <input
                        type="password"
                        placeholder="Leave blank to keep current password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </section>
    }
    .into_view()
}
