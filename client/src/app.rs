//! Document shell and root application component.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::site::{DESCRIPTION, LANG, STYLESHEET_HREF, TITLE};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <RootLayout options>
            <App/>
        </RootLayout>
    }
}

/// Minimal document around `children`.
///
/// The `<head>` carries the hydration scripts and the `<MetaTags/>`
/// insertion point where `leptos_meta` writes the title and description
/// declared by [`App`]. The single `<body>` holds `children` as-is.
#[component]
pub fn RootLayout(options: LeptosOptions, children: Children) -> impl IntoView {
    view! {
        <html lang=LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Root application component.
///
/// Declares the page metadata and routes `/` to the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text=TITLE/>
        <Meta name="description" content=DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
