//! Page modules for route-level screens.
//!
//! Each page owns its route-level container and delegates rendering details
//! to `components`.

pub mod home;
