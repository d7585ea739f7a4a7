//! Third-party profile page, driven by the `:name` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::ProfileDetail;

#[component]
pub fn ProfileDetailPage() -> impl IntoView {
    let params = use_params_map();
    let profile = RwSignal::new(None::<ProfileDetail>);
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.get().get("name") else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::profiles::get_profile_by_id(&id).await {
                    Ok(detail) => profile.set(Some(detail)),
                    Err(err) => load_error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="profile-detail-page">
            <Show when=move || load_error.get().is_some()>
                <p class="profile-detail-page__error">
                    {move || load_error.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || profile.get().is_some() fallback=|| view! { <p>"Loading..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|detail| {
                            view! {
                                <article class="profile-detail">
                                    <img
                                        class="profile-detail__cover"
                                        src=detail.cover_image.clone().unwrap_or_default()
                                        alt=detail.name.clone()
                                    />
                                    <h1 class="profile-detail__name">{detail.name.clone()}</h1>
                                    <p class="profile-detail__description">
                                        {detail.description.clone().unwrap_or_default()}
                                    </p>
                                    <div class="profile-detail__gallery">
                                        <img src=detail.image_1.clone().unwrap_or_default()/>
                                        <img src=detail.image_2.clone().unwrap_or_default()/>
                                        <img src=detail.image_3.clone().unwrap_or_default()/>
                                    </div>
                                    <div class="profile-detail__links">
                                        {detail
                                            .whatsapp_link
                                            .clone()
                                            .map(|link| view! { <a href=link>"WhatsApp"</a> })}
                                        {detail
                                            .facebook_link
                                            .clone()
                                            .map(|link| view! { <a href=link>"Facebook"</a> })}
                                    </div>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
