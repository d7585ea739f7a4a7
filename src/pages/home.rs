//! Home page listing every profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public landing route. A failed list request degrades to an empty
//! grid with a logged warning; sign-in state only switches the header
//! affordances.

use leptos::prelude::*;

use crate::app::{LOGIN_PATH, MY_PROFILE_PATH};
use crate::components::profile_card::ProfileCard;
use crate::net::profiles::DEFAULT_IMAGE;
use crate::net::types::Profile;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profiles = RwSignal::new(Vec::<Profile>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::profiles::get_all_profiles().await {
                Ok(items) => profiles.set(items),
                Err(err) => leptos::logging::warn!("profile list failed: {err}"),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        loading.set(false);
    }

    let on_logout = move |_| auth.update(|state| state.logout());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__title">"Conectando Corazones"</span>
                <Show
                    when=move || auth.get().is_user_authenticated()
                    fallback=|| view! { <a class="home-page__link" href=LOGIN_PATH>"Sign in"</a> }
                >
                    <a class="home-page__link" href=MY_PROFILE_PATH>"My profile"</a>
                    <button class="home-page__link" on:click=on_logout>"Log out"</button>
                </Show>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="home-page__grid">
                    <For
                        each=move || profiles.get()
                        key=|profile| profile.id.clone()
                        children=|profile| {
                            view! {
                                <ProfileCard
                                    name=profile.name
                                    cover_image=profile
                                        .cover_image
                                        .unwrap_or_else(|| DEFAULT_IMAGE.to_owned())
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
