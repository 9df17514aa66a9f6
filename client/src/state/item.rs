//! Item page state: the loaded ad, its neighbors and the moderation dialog.
//!
//! DESIGN
//! ======
//! The reject and request-changes dialogs share one shape, so a single
//! optional [`ModerationDraft`] models both: `None` means no dialog is open,
//! and closing a dialog discards its reason and comment.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use crate::net::error::ApiError;
use crate::net::types::{Advertisement, ModerationRequest, RejectReason};
use crate::util::shortcuts::ShortcutContext;

/// How many ads are scanned to find the previous/next neighbor.
pub const NEIGHBOR_WINDOW: u32 = 1000;

/// Which moderation dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Reject,
    RequestChanges,
}

impl DialogKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Reject => "Отклонить объявление",
            Self::RequestChanges => "Вернуть на доработку",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Reject => "Отклонить",
            Self::RequestChanges => "Отправить на доработку",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Self::Reject => "error",
            Self::RequestChanges => "warning",
        }
    }
}

/// Transient input of an open moderation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModerationDraft {
    pub kind: DialogKind,
    pub reason: Option<RejectReason>,
    pub comment: String,
}

impl ModerationDraft {
    pub fn new(kind: DialogKind) -> Self {
        Self { kind, reason: None, comment: String::new() }
    }

    /// Confirm needs a reason, and a comment when the reason is "Другое".
    pub fn can_confirm(&self) -> bool {
        match self.reason {
            None => false,
            Some(reason) => !reason.requires_comment() || !self.comment.is_empty(),
        }
    }

    /// Request body, or `None` while the draft cannot be confirmed.
    pub fn request(&self) -> Option<ModerationRequest> {
        if !self.can_confirm() {
            return None;
        }
        self.reason.map(|reason| ModerationRequest::new(reason, &self.comment))
    }

    pub fn shows_comment(&self) -> bool {
        self.reason.is_some_and(RejectReason::requires_comment)
    }
}

/// Previous/next ad ids around the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

/// Locate `current` in `ids` (newest first) and return the adjacent ids.
///
/// An id outside the scanned window has no neighbors.
pub fn find_neighbors(ids: &[u64], current: u64) -> Neighbors {
    let Some(index) = ids.iter().position(|id| *id == current) else {
        return Neighbors::default();
    };
    Neighbors {
        prev: index.checked_sub(1).map(|i| ids[i]),
        next: ids.get(index + 1).copied(),
    }
}

/// Parse the `:id` route segment. Anything but a positive integer is `None`.
pub fn parse_ad_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Complete item page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemState {
    pub ad: Option<Advertisement>,
    pub loading: bool,
    pub neighbors: Neighbors,
    pub draft: Option<ModerationDraft>,
    /// Sequence of the latest load; responses for older ones are dropped.
    load_seq: u64,
    /// Id of the latest load.
    load_id: Option<u64>,
}

impl ItemState {
    /// Initial state for a route id. A usable id renders as loading from the
    /// first paint so the "not found" view never flashes before the fetch.
    pub fn for_route(id: Option<u64>) -> Self {
        Self { loading: id.is_some(), ..Self::default() }
    }

    /// Start loading `id` and return the sequence its responses must carry.
    /// A different ad than the one shown is cleared together with its
    /// neighbors and any open dialog.
    pub fn begin_load(&mut self, id: u64) -> u64 {
        if self.ad.as_ref().is_some_and(|ad| ad.id != id) {
            self.ad = None;
            self.draft = None;
            self.neighbors = Neighbors::default();
        }
        self.loading = true;
        self.load_id = Some(id);
        self.load_seq += 1;
        self.load_seq
    }

    /// Reset to the "not found" state for an unusable route id. Loads still
    /// in flight are invalidated.
    pub fn not_found(&mut self) {
        *self = Self { load_seq: self.load_seq + 1, ..Self::default() };
    }

    /// Apply a load result; failures keep whatever was shown before.
    /// Returns `false` if `seq` belongs to a superseded load.
    pub fn finish_load(&mut self, seq: u64, result: Result<Advertisement, ApiError>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        if let Ok(ad) = result {
            self.ad = Some(ad);
        }
        self.loading = false;
        true
    }

    /// Apply neighbors computed around `id`. They only depend on the id, so
    /// a reload of the same ad does not invalidate them.
    pub fn set_neighbors(&mut self, id: u64, neighbors: Neighbors) -> bool {
        if self.load_id != Some(id) {
            return false;
        }
        self.neighbors = neighbors;
        true
    }

    pub fn open_dialog(&mut self, kind: DialogKind) {
        self.draft = Some(ModerationDraft::new(kind));
    }

    pub fn close_dialog(&mut self) {
        self.draft = None;
    }

    pub fn dialog_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn set_reason(&mut self, reason: Option<RejectReason>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.reason = reason;
        }
    }

    pub fn set_comment(&mut self, comment: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.comment = comment;
        }
    }

    pub fn shortcut_context(&self) -> ShortcutContext {
        ShortcutContext {
            status: self.ad.as_ref().map(|ad| ad.status),
            dialog_open: self.dialog_open(),
            prev: self.neighbors.prev,
            next: self.neighbors.next,
        }
    }
}
