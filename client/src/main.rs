//! Browser entry point: initialize logging, then mount the app.

mod app;
mod components;
mod state;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize console logging");
    leptos::mount::mount_to_body(App);
}
