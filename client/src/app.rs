//! Root application component with routing and the auth bridge host.

use std::sync::Arc;

use auth_bridge::fake::FakeProvider;
use auth_bridge::{Account, AccountInfo, AuthProvider};
use leptos::children::ViewFn;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_bridge::{AuthBridge, BridgeContent};
use crate::pages::{dashboard::DashboardPage, login::LoginPage};

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
/// Mounts the auth bridge over an in-memory provider and renders the routes
/// as its static content, so every page sees the bridge's context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider: Arc<dyn AuthProvider> = Arc::new(demo_provider());
    let content = BridgeContent::Static(ViewFn::from(routes));

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-bridge.css"/>
        <Title text="Auth Bridge"/>

        <AuthBridge provider content/>
    }
}

fn routes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Signed-out provider whose login completes immediately with a fixed account.
fn demo_provider() -> FakeProvider {
    FakeProvider::signed_out().interactive(AccountInfo::new(Account {
        id: "demo-home-account".to_owned(),
        name: Some("Demo User".to_owned()),
        username: Some("demo@example.com".to_owned()),
    }))
}
