//! Keyboard shortcut resolution for the item page.
//!
//! DESIGN
//! ======
//! The page's `keydown` listener only extracts the key and its modifiers and
//! hands them to [`resolve_shortcut`] together with a snapshot of page state. All rules live
//! here as a pure function so they can be tested without a DOM.
//!
//! Neighbor navigation (`Alt+ArrowLeft` / `Alt+ArrowRight`) is checked first
//! and works with a dialog open. Letter shortcuts are case-insensitive and
//! ignored while any moderation dialog is open. Anything pressed with Ctrl or
//! Meta belongs to the browser (reload, bookmark, select all) and is never
//! claimed.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use crate::net::types::AdStatus;
use crate::state::item::DialogKind;

/// Page state a shortcut decision depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShortcutContext {
    /// Status of the loaded ad; `None` until the ad has loaded.
    pub status: Option<AdStatus>,
    pub dialog_open: bool,
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self { alt: false, ctrl: false, meta: false };
    pub const ALT: Self = Self { alt: true, ctrl: false, meta: false };
}

/// What a key press should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Approve,
    OpenDialog(DialogKind),
    Navigate(u64),
}

/// Map a key press to an action, or `None` when it should be ignored.
pub fn resolve_shortcut(key: &str, modifiers: KeyModifiers, ctx: &ShortcutContext) -> Option<Shortcut> {
    let status = ctx.status?;
    if modifiers.ctrl || modifiers.meta {
        return None;
    }

    if modifiers.alt {
        let target = match key {
            "ArrowLeft" => ctx.prev,
            "ArrowRight" => ctx.next,
            _ => None,
        };
        if let Some(id) = target {
            return Some(Shortcut::Navigate(id));
        }
    }

    if ctx.dialog_open {
        return None;
    }

    match key.to_lowercase().as_str() {
        "a" if status != AdStatus::Approved => Some(Shortcut::Approve),
        "d" if status != AdStatus::Rejected => Some(Shortcut::OpenDialog(DialogKind::Reject)),
        "r" => Some(Shortcut::OpenDialog(DialogKind::RequestChanges)),
        _ => None,
    }
}
