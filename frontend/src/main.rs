//! Entry point for the WASM application

use ingest_frontend::{init_logging, App};
use leptos::*;

pub fn main() {
    init_logging();

    mount_to_body(|| view! { <App/> })
}
