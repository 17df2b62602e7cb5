//! Auth Pages
//!
//! Login and signup forms.

use leptos::*;

use crate::actions;
use crate::api::SignupRequest;
use crate::state::models::UserKind;
use crate::state::session::{SessionState, View};

/// Login form
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let view_signal = state.view;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            if actions::sign_in(state, u, p).await {
                set_username.set(String::new());
                set_password.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Login"</h1>

            <form on:submit=on_submit class="space-y-4">
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
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
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
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "No account yet? "
                <button
                    on:click=move |_| view_signal.set(View::Signup)
                    class="text-primary-400 hover:underline"
                >
                    "Sign up"
                </button>
            </p>
        </div>
    }
}

/// Registration form. The admin-request checkbox only renders while the
/// selected type is Admin, and flipping the type away resets it.
#[component]
pub fn SignupPage() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (fname, set_fname) = create_signal(String::new());
    let (mname, set_mname) = create_signal(String::new());
    let (lname, set_lname) = create_signal(String::new());
    let (kind, set_kind) = create_signal("User".to_string());
    let (email, set_email) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (request_admin, set_request_admin) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let view_signal = state.view;

    let on_kind_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if value != "Admin" {
            set_request_admin.set(false);
        }
        set_kind.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest::new(
            &fname.get(),
            &mname.get(),
            &lname.get(),
            UserKind::parse(&kind.get()),
            &email.get(),
            &username.get(),
            &password.get(),
            request_admin.get(),
        );
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            // On rejection the form stays populated for another attempt
            if actions::sign_up(state, request).await {
                set_fname.set(String::new());
                set_mname.set(String::new());
                set_lname.set(String::new());
                set_kind.set("User".to_string());
                set_email.set(String::new());
                set_username.set(String::new());
                set_password.set(String::new());
                set_request_admin.set(false);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Create Account"</h1>

            <form on:submit=on_submit class="space-y-4">
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
                    <label class="block text-sm text-gray-400 mb-2">"Account type"</label>
                    <select
                        on:change=on_kind_change
                        prop:value=move || kind.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="User">"User"</option>
                        <option value="Admin">"Admin"</option>
                    </select>
                </div>

                // Admin elevation request, Admin signups only
                {move || (kind.get() == "Admin").then(|| view! {
                    <label class="flex items-center space-x-2 text-sm text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || request_admin.get()
                            on:change=move |ev| set_request_admin.set(event_target_checked(&ev))
                        />
                        <span>"Request admin elevation"</span>
                    </label>
                })}

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
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
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
                    {move || if submitting.get() { "Creating..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "Already registered? "
                <button
                    on:click=move |_| view_signal.set(View::Login)
                    class="text-primary-400 hover:underline"
                >
                    "Back to login"
                </button>
            </p>
        </div>
    }
}
