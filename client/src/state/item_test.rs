use super::*;
use crate::net::types::{AdPriority, AdStatus, Seller};

fn ad(id: u64, status: AdStatus) -> Advertisement {
    Advertisement {
        id,
        title: "Велосипед".to_owned(),
        description: "Почти новый".to_owned(),
        price: 15_000.0,
        category: "Спорт".to_owned(),
        category_id: 7,
        status,
        priority: AdPriority::Urgent,
        created_at: "2025-10-05T12:00:00Z".to_owned(),
        updated_at: "2025-10-06T12:00:00Z".to_owned(),
        images: vec!["https://img.example/1.jpg".to_owned()],
        seller: Seller {
            id: 2,
            name: "Мария".to_owned(),
            rating: "4.2".to_owned(),
            total_ads: 11,
            registered_at: "2023-03-01T00:00:00Z".to_owned(),
        },
        characteristics: vec![("Цвет".to_owned(), "Синий".to_owned())],
        moderation_history: Vec::new(),
    }
}

// =============================================================
// ModerationDraft
// =============================================================

#[test]
fn confirm_disabled_without_reason() {
    let draft = ModerationDraft::new(DialogKind::Reject);
    assert!(!draft.can_confirm());
    assert_eq!(draft.request(), None);
}

#[test]
fn confirm_disabled_for_other_with_empty_comment() {
    let draft = ModerationDraft {
        kind: DialogKind::RequestChanges,
        reason: Some(RejectReason::Other),
        comment: String::new(),
    };
    assert!(!draft.can_confirm());
    assert!(draft.shows_comment());
}

#[test]
fn confirm_enabled_for_other_with_comment() {
    let draft = ModerationDraft {
        kind: DialogKind::Reject,
        reason: Some(RejectReason::Other),
        comment: "Дубликат".to_owned(),
    };
    assert!(draft.can_confirm());
    assert_eq!(
        draft.request(),
        Some(ModerationRequest { reason: RejectReason::Other, comment: Some("Дубликат".to_owned()) })
    );
}

#[test]
fn confirm_enabled_for_fixed_reason_and_comment_dropped() {
    for reason in RejectReason::ALL.into_iter().filter(|r| !r.requires_comment()) {
        let draft = ModerationDraft { kind: DialogKind::Reject, reason: Some(reason), comment: "лишнее".to_owned() };
        assert!(draft.can_confirm());
        assert!(!draft.shows_comment());
        assert_eq!(draft.request(), Some(ModerationRequest { reason, comment: None }));
    }
}

#[test]
fn dialog_kinds_have_distinct_labels() {
    assert_eq!(DialogKind::Reject.confirm_label(), "Отклонить");
    assert_eq!(DialogKind::RequestChanges.confirm_label(), "Отправить на доработку");
    assert_eq!(DialogKind::RequestChanges.title(), "Вернуть на доработку");
}

// =============================================================
// Neighbors
// =============================================================

#[test]
fn neighbors_of_middle_item() {
    assert_eq!(find_neighbors(&[30, 20, 10], 20), Neighbors { prev: Some(30), next: Some(10) });
}

#[test]
fn neighbors_at_edges_are_one_sided() {
    assert_eq!(find_neighbors(&[30, 20, 10], 30), Neighbors { prev: None, next: Some(20) });
    assert_eq!(find_neighbors(&[30, 20, 10], 10), Neighbors { prev: Some(20), next: None });
}

#[test]
fn absent_item_has_no_neighbors() {
    assert_eq!(find_neighbors(&[30, 20, 10], 99), Neighbors::default());
    assert_eq!(find_neighbors(&[], 1), Neighbors::default());
}

// =============================================================
// Route id
// =============================================================

#[test]
fn route_id_must_be_a_positive_integer() {
    assert_eq!(parse_ad_id("42"), Some(42));
    assert_eq!(parse_ad_id("0"), None);
    assert_eq!(parse_ad_id("abc"), None);
    assert_eq!(parse_ad_id("-3"), None);
    assert_eq!(parse_ad_id(""), None);
}

// =============================================================
// ItemState
// =============================================================

#[test]
fn closing_dialog_clears_draft() {
    let mut state = ItemState::default();
    state.open_dialog(DialogKind::Reject);
    state.set_reason(Some(RejectReason::Other));
    state.set_comment("текст".to_owned());
    assert!(state.dialog_open());

    state.close_dialog();
    assert!(!state.dialog_open());

    state.open_dialog(DialogKind::Reject);
    assert_eq!(state.draft, Some(ModerationDraft::new(DialogKind::Reject)));
}

#[test]
fn draft_setters_ignore_closed_dialog() {
    let mut state = ItemState::default();
    state.set_reason(Some(RejectReason::WrongCategory));
    state.set_comment("x".to_owned());
    assert_eq!(state.draft, None);
}

#[test]
fn failed_reload_keeps_current_ad() {
    let mut state = ItemState::default();
    let seq = state.begin_load(5);
    assert!(state.finish_load(seq, Ok(ad(5, AdStatus::Pending))));

    let seq = state.begin_load(5);
    assert!(state.ad.is_some());
    state.finish_load(seq, Err(ApiError::Status { endpoint: "/ads/5".to_owned(), status: 500 }));
    assert_eq!(state.ad.as_ref().map(|a| a.id), Some(5));
    assert!(!state.loading);
}

#[test]
fn loading_another_id_clears_previous_ad() {
    let mut state = ItemState::default();
    let seq = state.begin_load(5);
    state.finish_load(seq, Ok(ad(5, AdStatus::Pending)));
    state.set_neighbors(5, Neighbors { prev: Some(4), next: Some(6) });
    state.open_dialog(DialogKind::RequestChanges);

    state.begin_load(6);
    assert!(state.ad.is_none());
    assert!(!state.dialog_open());
    assert_eq!(state.neighbors, Neighbors::default());
    assert!(state.loading);
}

#[test]
fn response_for_previous_route_is_dropped() {
    let mut state = ItemState::default();
    let first = state.begin_load(5);
    let second = state.begin_load(6);

    assert!(!state.finish_load(first, Ok(ad(5, AdStatus::Pending))));
    assert!(!state.set_neighbors(5, Neighbors { prev: Some(7), next: Some(4) }));
    assert!(state.ad.is_none());
    assert!(state.loading);
    assert_eq!(state.neighbors, Neighbors::default());

    assert!(state.finish_load(second, Ok(ad(6, AdStatus::Pending))));
    assert!(state.set_neighbors(6, Neighbors { prev: Some(8), next: Some(5) }));
    assert_eq!(state.ad.as_ref().map(|a| a.id), Some(6));
    assert_eq!(state.neighbors.next, Some(5));
}

#[test]
fn reload_of_same_ad_keeps_pending_neighbors() {
    let mut state = ItemState::default();
    let seq = state.begin_load(5);
    state.finish_load(seq, Ok(ad(5, AdStatus::Pending)));

    state.begin_load(5);
    assert!(state.set_neighbors(5, Neighbors { prev: None, next: Some(4) }));
    assert_eq!(state.neighbors.next, Some(4));
}

#[test]
fn not_found_clears_everything() {
    let mut state = ItemState::default();
    let seq = state.begin_load(5);
    state.finish_load(seq, Ok(ad(5, AdStatus::Approved)));
    state.open_dialog(DialogKind::Reject);
    let pending = state.begin_load(5);
    state.not_found();

    assert!(state.ad.is_none());
    assert!(!state.loading);
    assert!(!state.dialog_open());
    assert_eq!(state.neighbors, Neighbors::default());
    assert!(!state.finish_load(pending, Ok(ad(5, AdStatus::Approved))));
    assert!(state.ad.is_none());
}

#[test]
fn valid_route_starts_in_loading_state() {
    let state = ItemState::for_route(parse_ad_id("42"));
    assert!(state.loading);
    assert!(state.ad.is_none());

    let state = ItemState::for_route(parse_ad_id("abc"));
    assert!(!state.loading);
    assert_eq!(state, ItemState::default());
}

#[test]
fn first_load_after_route_init_applies() {
    let mut state = ItemState::for_route(Some(42));
    let seq = state.begin_load(42);
    assert!(state.finish_load(seq, Ok(ad(42, AdStatus::Pending))));
    assert!(!state.loading);
}

#[test]
fn shortcut_context_reflects_state() {
    let mut state = ItemState::default();
    assert_eq!(state.shortcut_context().status, None);

    let seq = state.begin_load(5);
    state.finish_load(seq, Ok(ad(5, AdStatus::Rejected)));
    state.set_neighbors(5, Neighbors { prev: Some(6), next: None });
    state.open_dialog(DialogKind::Reject);

    let ctx = state.shortcut_context();
    assert_eq!(ctx.status, Some(AdStatus::Rejected));
    assert!(ctx.dialog_open);
    assert_eq!(ctx.prev, Some(6));
    assert_eq!(ctx.next, None);
}
