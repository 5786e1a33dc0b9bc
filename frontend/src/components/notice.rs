//! Single-slot status banner.
//!
//! Title and body are rendered as text nodes, so server-supplied messages
//! are never interpreted as markup.

use leptos::*;

use crate::state::NoticeState;

#[component]
pub fn NoticeBanner(notice: ReadSignal<NoticeState>) -> impl IntoView {
    view! {
        <div
            id="notice"
            role="status"
            class=move || notice.with(|n| format!("notice {}", n.level.css_class()))
            style:display=move || if notice.with(|n| n.visible) { "block" } else { "none" }
        >
            <div id="noticeTitle" class="notice__title">
                {move || notice.with(|n| n.title.clone())}
            </div>
            <div id="noticeBody" class="notice__body">
                {move || notice.with(|n| n.body.clone())}
            </div>
        </div>
    }
}
