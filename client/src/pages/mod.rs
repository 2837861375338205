//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page. It owns the scroll observer lifecycle and
//! delegates rendering to `components`.

pub mod home;
