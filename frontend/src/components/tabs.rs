//! Tab bar switching the hub between the video and ZIP panels.

use leptos::*;

use crate::state::{NoticeState, Tab, TabState};

#[component]
pub fn TabBar(
    tabs: ReadSignal<TabState>,
    set_tabs: WriteSignal<TabState>,
    notice: ReadSignal<NoticeState>,
    set_notice: WriteSignal<NoticeState>,
) -> impl IntoView {
    let activate = move |which: Tab| {
        let mut next = tabs.get_untracked();
        let mut current_notice = notice.get_untracked();
        next.activate(which, &mut current_notice);

        set_tabs.set(next);
        set_notice.set(current_notice);
    };

    view! {
        <div class="tabs" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            id=tab.button_id()
                            aria-controls=tab.panel_id()
                            aria-selected=move || tabs.with(|t| t.aria_selected(tab))
                            class=move || {
                                if tabs.with(|t| t.panel_visible(tab)) { "tab tab--active" } else { "tab" }
                            }
                            on:click=move |_| activate(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Panel shown only while its tab is active.
#[component]
pub fn TabPanel(tab: Tab, tabs: ReadSignal<TabState>, children: Children) -> impl IntoView {
    view! {
        <section
            id=tab.panel_id()
            role="tabpanel"
            aria-labelledby=tab.button_id()
            style:display=move || if tabs.with(|t| t.panel_visible(tab)) { "block" } else { "none" }
        >
            {children()}
        </section>
    }
}
