//! Profile list card.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent and centralizes the link to the
//! detail route.

use leptos::prelude::*;

use crate::app::profile_detail_path;

/// A clickable card representing one profile in the home listing.
#[component]
pub fn ProfileCard(name: String, cover_image: String) -> impl IntoView {
    let href = profile_detail_path(&name);
    view! {
        <a class="profile-card" href=href>
            <img class="profile-card__cover" src=cover_image alt=name.clone()/>
            <span class="profile-card__name">{name}</span>
        </a>
    }
}
