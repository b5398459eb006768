//! AI Safety Incident Dashboard — Leptos CSR entry point.

mod app;
mod format;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <app::App /> });
}
