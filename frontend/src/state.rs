//! Page state: notice banner, per-form busy state and the hub tabs.
//!
//! Each piece of state is a plain value held in a Leptos signal. The
//! components only render it; every transition lives here so it can be
//! tested without a browser.

use leptos::*;

// =============================================================================
// Notice
// =============================================================================

/// Notice severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Success styling
    Ok,
    /// Warning styling
    Warn,
    /// Error styling, also the fallback for unknown levels
    #[default]
    Err,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Ok => "notice--ok",
            NoticeLevel::Warn => "notice--warn",
            NoticeLevel::Err => "notice--err",
        }
    }
}

impl From<&str> for NoticeLevel {
    fn from(level: &str) -> Self {
        match level {
            "ok" => NoticeLevel::Ok,
            "warn" => NoticeLevel::Warn,
            _ => NoticeLevel::Err,
        }
    }
}

/// The single on-page notice. A new notice replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
    pub visible: bool,
}

impl NoticeState {
    /// A visible notice.
    pub fn shown(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            visible: true,
        }
    }

    /// Replace the current notice and make it visible.
    pub fn show(&mut self, level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) {
        *self = Self::shown(level, title, body);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

// =============================================================================
// Busy state
// =============================================================================

/// Submit control state for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusyState {
    /// Request in flight; the submit button is disabled
    pub submitting: bool,
    /// Status label next to the button
    pub status: String,
}

impl BusyState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn submitting(status: impl Into<String>) -> Self {
        Self {
            submitting: true,
            status: status.into(),
        }
    }
}

/// Somewhere a form's busy state is written to.
pub trait BusyTarget {
    fn set_busy(&self, state: BusyState);
}

impl BusyTarget for WriteSignal<BusyState> {
    // The form may be gone by the time the request settles
    fn set_busy(&self, state: BusyState) {
        _ = self.try_set(state);
    }
}

impl<T: BusyTarget + ?Sized> BusyTarget for &T {
    fn set_busy(&self, state: BusyState) {
        (**self).set_busy(state);
    }
}

/// Holds a form in the busy state until dropped.
///
/// Dropping releases the form exactly once, whichever way the submission
/// ends.
#[must_use = "the form is released as soon as the guard is dropped"]
pub struct BusyGuard<T: BusyTarget> {
    target: T,
}

impl<T: BusyTarget> BusyGuard<T> {
    pub fn engage(target: T, status: impl Into<String>) -> Self {
        target.set_busy(BusyState::submitting(status));
        Self { target }
    }
}

impl<T: BusyTarget> Drop for BusyGuard<T> {
    fn drop(&mut self) {
        self.target.set_busy(BusyState::idle());
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Hub panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Video,
    Zip,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Video, Tab::Zip];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Video => "Vídeo",
            Tab::Zip => "ZIP de imágenes",
        }
    }

    pub fn button_id(&self) -> &'static str {
        match self {
            Tab::Video => "tabBtnVideo",
            Tab::Zip => "tabBtnZip",
        }
    }

    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::Video => "panelVideo",
            Tab::Zip => "panelZip",
        }
    }
}

/// Which hub panel is showing. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch panels. The notice is hidden on every switch, including a
    /// click on the tab that is already active.
    pub fn activate(&mut self, which: Tab, notice: &mut NoticeState) {
        self.active = which;
        notice.hide();
    }

    pub fn panel_visible(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Value for the tab's `aria-selected` attribute.
    pub fn aria_selected(&self, tab: Tab) -> &'static str {
        if self.panel_visible(tab) {
            "true"
        } else {
            "false"
        }
    }
}
