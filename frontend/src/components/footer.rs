//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>{APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/" class="footer-link">"Hub de subida"</a>
                <a href="/video" class="footer-link">"Solo vídeo"</a>
            </div>
        </footer>
    }
}
