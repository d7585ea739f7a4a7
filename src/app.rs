//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, login::LoginPage, my_profile::MyProfilePage, profile_detail::ProfileDetailPage,
};
use crate::state::auth::AuthState;

/// Client-side route table. No guards, no nesting.
pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const MY_PROFILE_PATH: &str = "/profile/me";

/// Path to a third party's profile page.
pub fn profile_detail_path(name: &str) -> String {
    format!("/profile/{name}")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores any stored session before the first route renders and
/// provides the auth state context for the page tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut initial = AuthState::default();
    initial.initialize_auth();
    let auth = RwSignal::new(initial);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/corazones.css"/>
        <Title text="Conectando Corazones"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("profile"), StaticSegment("me")) view=MyProfilePage/>
                <Route path=(StaticSegment("profile"), ParamSegment("name")) view=ProfileDetailPage/>
            </Routes>
        </Router>
    }
}
