//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section of the home page is its own component. Sections read the
//! shared `VisibilitySet` context through `reveal::use_section_visible` to
//! pick their transition classes.

pub mod about_section;
pub mod brand;
pub mod contact_section;
pub mod featured_properties;
pub mod hero;
pub mod icon;
pub mod property_card;
pub mod reveal;
pub mod section_heading;
pub mod services_section;
pub mod site_footer;
pub mod site_header;
pub mod whatsapp_button;
pub mod why_choose_us;
