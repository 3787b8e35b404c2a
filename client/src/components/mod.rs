//! Reusable view components.

pub mod hero;
