//! Landing page.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::site::{HERO_EYEBROW, HERO_TAGLINE, HERO_TITLE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Hero eyebrow=HERO_EYEBROW title=HERO_TITLE tagline=HERO_TAGLINE/>
        </main>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
