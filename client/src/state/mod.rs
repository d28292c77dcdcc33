//! Shared client state provided through Leptos context.

pub mod layers;
pub mod ui;
