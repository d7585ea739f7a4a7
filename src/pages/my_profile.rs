//! Own-profile editor: text fields, four image slots, and account
//! management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field inputs hold drafts locally; submitting sends a partial
//! multipart update (present fields only) and re-adopts the returned
//! record. Account actions delegate to the user service; deleting the
//! account falls back to logged-out state and returns to the login
//! route.

#[cfg(test)]
#[path = "my_profile_test.rs"]
mod my_profile_test;

use leptos::prelude::*;

use crate::app::LOGIN_PATH;
#[cfg(feature = "hydrate")]
use crate::net::types::UserUpdate;
use crate::net::types::{ChangePassword, ProfileDetail, ProfileUpdate};
use crate::state::auth::AuthState;

/// Empty or whitespace-only drafts are treated as absent.
fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Build the partial profile patch from the form drafts.
fn update_from_fields(
    name: &str,
    description: &str,
    whatsapp_link: &str,
    facebook_link: &str,
) -> ProfileUpdate {
    ProfileUpdate {
        name: non_empty(name),
        description: non_empty(description),
        whatsapp_link: non_empty(whatsapp_link),
        facebook_link: non_empty(facebook_link),
        ..ProfileUpdate::default()
    }
}

/// Validate the change-password form.
fn validate_password_input(
    old_password: &str,
    new_password: &str,
) -> Result<ChangePassword, &'static str> {
    let old_password = old_password.trim();
    let new_password = new_password.trim();
    if old_password.is_empty() || new_password.is_empty() {
        return Err("Enter both the current and the new password.");
    }
    Ok(ChangePassword {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
    })
}

#[cfg(feature = "hydrate")]
fn file_from(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0))
}

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let profile = RwSignal::new(None::<ProfileDetail>);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    // Profile form drafts.
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let whatsapp_link = RwSignal::new(String::new());
    let facebook_link = RwSignal::new(String::new());
    let cover_ref = NodeRef::<leptos::html::Input>::new();
    let image_1_ref = NodeRef::<leptos::html::Input>::new();
    let image_2_ref = NodeRef::<leptos::html::Input>::new();
    let image_3_ref = NodeRef::<leptos::html::Input>::new();

    // Account form drafts.
    let account_username = RwSignal::new(String::new());
    let account_email = RwSignal::new(String::new());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let account_info = RwSignal::new(String::new());

    if let Some(user) = auth.get_untracked().user {
        account_username.set(user.username);
        account_email.set(user.email);
    }

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::profiles::get_my_profile().await {
                Ok(detail) => {
                    name.set(detail.name.clone());
                    description.set(detail.description.clone().unwrap_or_default());
                    whatsapp_link.set(detail.whatsapp_link.clone().unwrap_or_default());
                    facebook_link.set(detail.facebook_link.clone().unwrap_or_default());
                    profile.set(Some(detail));
                }
                Err(err) => info.set(format!("Could not load your profile: {err}")),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        loading.set(false);
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let update = update_from_fields(
                &name.get(),
                &description.get(),
                &whatsapp_link.get(),
                &facebook_link.get(),
            );
            let files = crate::net::profiles::ProfileImageFiles {
                cover_image: file_from(cover_ref),
                image_1: file_from(image_1_ref),
                image_2: file_from(image_2_ref),
                image_3: file_from(image_3_ref),
            };
            leptos::task::spawn_local(async move {
                match crate::net::profiles::update_my_profile(&update, &files).await {
                    Ok(detail) => {
                        profile.set(Some(detail));
                        info.set("Profile saved.".to_owned());
                    }
                    Err(err) => info.set(format!("Save failed: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    let on_account_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let update = UserUpdate {
                username: non_empty(&account_username.get()),
                email: non_empty(&account_email.get()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::users::update_user(&user.id, &update).await {
                    Ok(updated) => {
                        // Keep the stored session in agreement with the
                        // account record.
                        auth.update(|state| {
                            if let Some(session) = state.user.clone() {
                                state.set_user_data(crate::net::types::AuthResponse {
                                    username: updated.username.clone(),
                                    email: updated.email.clone(),
                                    ..session
                                });
                            }
                        });
                        account_info.set("Account updated.".to_owned());
                    }
                    Err(err) => account_info.set(format!("Update failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let payload = match validate_password_input(&old_password.get(), &new_password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                account_info.set(message.to_owned());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::users::change_password(&user.id, &payload).await {
                    Ok(_) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        account_info.set("Password changed.".to_owned());
                    }
                    Err(err) => account_info.set(format!("Password change failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, payload);
        }
    };

    let on_delete_account = move |_| {
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::users::delete_user(&user.id).await {
                    Ok(()) => {
                        auth.update(|state| state.clear_user_data());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(LOGIN_PATH);
                        }
                    }
                    Err(err) => account_info.set(format!("Delete failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    };

    view! {
        <div class="my-profile-page">
            <Show
                when=move || auth.get().is_user_authenticated()
                fallback=|| {
                    view! {
                        <p class="my-profile-page__notice">
                            <a href=LOGIN_PATH>"Sign in"</a>
                            " to edit your profile."
                        </p>
                    }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <form class="profile-form" on:submit=on_save>
                        <h2>"My profile"</h2>
                        <input
                            class="profile-form__input"
                            type="text"
                            placeholder="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <textarea
                            class="profile-form__input"
                            placeholder="description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            class="profile-form__input"
                            type="url"
                            placeholder="WhatsApp link"
                            prop:value=move || whatsapp_link.get()
                            on:input=move |ev| whatsapp_link.set(event_target_value(&ev))
                        />
                        <input
                            class="profile-form__input"
                            type="url"
                            placeholder="Facebook link"
                            prop:value=move || facebook_link.get()
                            on:input=move |ev| facebook_link.set(event_target_value(&ev))
                        />
                        <label>"Cover image" <input type="file" accept="image/*" node_ref=cover_ref/></label>
                        <label>"Image 1" <input type="file" accept="image/*" node_ref=image_1_ref/></label>
                        <label>"Image 2" <input type="file" accept="image/*" node_ref=image_2_ref/></label>
                        <label>"Image 3" <input type="file" accept="image/*" node_ref=image_3_ref/></label>
                        <button class="profile-form__button" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                        <Show when=move || !info.get().is_empty()>
                            <p class="profile-form__message">{move || info.get()}</p>
                        </Show>
                    </form>

                    <form class="account-form" on:submit=on_account_save>
                        <h2>"Account"</h2>
                        <input
                            class="account-form__input"
                            type="text"
                            placeholder="username"
                            prop:value=move || account_username.get()
                            on:input=move |ev| account_username.set(event_target_value(&ev))
                        />
                        <input
                            class="account-form__input"
                            type="email"
                            placeholder="email"
                            prop:value=move || account_email.get()
                            on:input=move |ev| account_email.set(event_target_value(&ev))
                        />
                        <button class="account-form__button" type="submit">"Update account"</button>
                    </form>

                    <form class="account-form" on:submit=on_change_password>
                        <input
                            class="account-form__input"
                            type="password"
                            placeholder="current password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                        <input
                            class="account-form__input"
                            type="password"
                            placeholder="new password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <button class="account-form__button" type="submit">"Change password"</button>
                    </form>

                    <button class="account-form__delete" on:click=on_delete_account>
                        "Delete account"
                    </button>
                    <Show when=move || !account_info.get().is_empty()>
                        <p class="account-form__message">{move || account_info.get()}</p>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
