//! Introductory hero block: eyebrow label, headline, tagline.

use leptos::prelude::*;

#[component]
pub fn Hero(eyebrow: &'static str, title: &'static str, tagline: &'static str) -> impl IntoView {
    view! {
        <section class="hero">
            <p class="eyebrow">{eyebrow}</p>
            <h1>{title}</h1>
            <p class="tagline">{tagline}</p>
        </section>
    }
}

#[cfg(test)]
#[path = "hero_test.rs"]
mod tests;
