//! Login page: credential sign-in plus account creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unauthenticated-only route. Sign-in delegates to the auth
//! state container so storage and the outgoing bearer header stay
//! consistent; account creation calls the user service directly and
//! then prompts the new user to sign in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::HOME_PATH;
use crate::net::types::{AuthLogin, UserCreate};
use crate::state::auth::AuthState;

/// Validate the sign-in form. Trims both fields and requires both.
fn validate_login_input(username_or_email: &str, password: &str) -> Result<AuthLogin, &'static str> {
    let username_or_email = username_or_email.trim();
    let password = password.trim();
    if username_or_email.is_empty() || password.is_empty() {
        return Err("Enter both username (or email) and password.");
    }
    Ok(AuthLogin {
        username_or_email: username_or_email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate the create-account form.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<UserCreate, &'static str> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter username, email, and password.");
    }
    Ok(UserCreate {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let new_username = RwSignal::new(String::new());
    let new_email = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username_or_email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut state = auth.get_untracked();
                let result = state.login(&credentials).await;
                auth.set(state);
                match result {
                    Ok(_) => navigate(HOME_PATH, NavigateOptions::default()),
                    Err(err) => {
                        info.set(format!("Sign-in failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &navigate);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload =
            match validate_register_input(&new_username.get(), &new_email.get(), &new_password.get()) {
                Ok(payload) => payload,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::users::create_user(&payload).await {
                    Ok(created) => {
                        info.set(format!(
                            "Account {} created. Sign in with your new credentials.",
                            created.username
                        ));
                    }
                    Err(err) => info.set(format!("Account creation failed: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &payload;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Conectando Corazones"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username or email"
                        prop:value=move || username_or_email.get()
                        on:input=move |ev| username_or_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or create an account"</p>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || new_username.get()
                        on:input=move |ev| new_username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || new_email.get()
                        on:input=move |ev| new_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
