//! Fixed site content shared by the document metadata and the home page.

/// Document title declared through `leptos_meta`.
pub const TITLE: &str = "Hoops Mania";

/// Document description, emitted as `<meta name="description">`.
pub const DESCRIPTION: &str = "AI-driven global basketball simulation game";

/// Value of the `lang` attribute on `<html>`.
pub const LANG: &str = "en";

pub const HERO_EYEBROW: &str = "Welcome to";
pub const HERO_TITLE: &str = "Hoops Mania";
/// Unlike [`DESCRIPTION`], the tagline ends with a period.
pub const HERO_TAGLINE: &str = "AI-driven global basketball simulation game.";

/// Compiled global stylesheet, produced by cargo-leptos from `style/globals.css`.
pub const STYLESHEET_HREF: &str = "/pkg/hoops-mania.css";

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
