use super::*;

// =============================================================
// Helpers
// =============================================================

fn ad_json() -> serde_json::Value {
    serde_json::json!({
        "id": 42,
        "title": "Велосипед горный",
        "description": "Почти новый",
        "price": 15500,
        "category": "Транспорт",
        "categoryId": 3,
        "status": "pending",
        "priority": "urgent",
        "createdAt": "2025-10-01T09:30:00.000Z",
        "updatedAt": "2025-10-02T10:00:00.000Z",
        "images": ["https://img.example/1.jpg", "https://img.example/2.jpg"],
        "seller": {
            "id": 7,
            "name": "Иван",
            "rating": "4.8",
            "totalAds": 12,
            "registeredAt": "2023-05-11T00:00:00.000Z"
        },
        "characteristics": {
            "Состояние": "Б/у",
            "Бренд": "Stels",
            "Гарантия": "Нет"
        },
        "moderationHistory": [
            {
                "id": 1,
                "moderatorId": 2,
                "moderatorName": "Анна",
                "action": "requestChanges",
                "reason": "Проблемы с фото",
                "comment": "",
                "timestamp": "2025-10-01T12:00:00.000Z"
            },
            {
                "id": 2,
                "moderatorId": 2,
                "moderatorName": "Анна",
                "action": "approved",
                "reason": null,
                "comment": "",
                "timestamp": "2025-10-02T10:00:00.000Z"
            }
        ]
    })
}

// =============================================================
// Enums
// =============================================================

#[test]
fn ad_status_uses_lowercase_wire_values() {
    assert_eq!(serde_json::to_string(&AdStatus::Pending).unwrap(), "\"pending\"");
    assert_eq!(serde_json::to_string(&AdStatus::Draft).unwrap(), "\"draft\"");
    for status in AdStatus::ALL {
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status.as_str()));
    }
}

#[test]
fn ad_status_rejects_unknown_values() {
    assert!(serde_json::from_str::<AdStatus>("\"archived\"").is_err());
}

#[test]
fn moderation_action_request_changes_is_camel_case() {
    assert_eq!(
        serde_json::to_string(&ModerationAction::RequestChanges).unwrap(),
        "\"requestChanges\""
    );
    assert_eq!(
        serde_json::from_str::<ModerationAction>("\"requestChanges\"").unwrap(),
        ModerationAction::RequestChanges
    );
}

#[test]
fn reject_reason_serializes_to_fixed_russian_strings() {
    let wire: Vec<String> = RejectReason::ALL
        .iter()
        .map(|r| serde_json::to_value(r).unwrap().as_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        wire,
        vec![
            "Запрещенный товар",
            "Неверная категория",
            "Некорректное описание",
            "Проблемы с фото",
            "Подозрение на мошенничество",
            "Другое",
        ]
    );
}

#[test]
fn reject_reason_from_wire_matches_as_str() {
    for reason in RejectReason::ALL {
        assert_eq!(RejectReason::from_wire(reason.as_str()), Some(reason));
    }
    assert_eq!(RejectReason::from_wire("Спам"), None);
    assert_eq!(RejectReason::from_wire(""), None);
}

#[test]
fn only_other_reason_requires_comment() {
    assert!(RejectReason::Other.requires_comment());
    assert!(!RejectReason::ProhibitedItem.requires_comment());
    assert!(!RejectReason::SuspectedFraud.requires_comment());
}

#[test]
fn reason_displays_as_wire_label() {
    for reason in RejectReason::ALL {
        assert_eq!(reason.to_string(), reason.as_str());
    }
    assert_eq!(format!("Причина: {}", RejectReason::Other), "Причина: Другое");
}

// =============================================================
// Advertisement
// =============================================================

#[test]
fn advertisement_decodes_full_payload() {
    let ad: Advertisement = serde_json::from_value(ad_json()).unwrap();
    assert_eq!(ad.id, 42);
    assert_eq!(ad.category_id, 3);
    assert_eq!(ad.status, AdStatus::Pending);
    assert_eq!(ad.priority, AdPriority::Urgent);
    assert_eq!(ad.images.len(), 2);
    assert_eq!(ad.seller.total_ads, 12);
    assert_eq!(ad.seller.rating, "4.8");
    assert_eq!(ad.moderation_history.len(), 2);
    assert_eq!(ad.moderation_history[0].reason, Some(RejectReason::PhotoProblems));
    assert_eq!(ad.moderation_history[1].reason, None);
}

#[test]
fn advertisement_characteristics_keep_server_order() {
    let ad: Advertisement = serde_json::from_value(ad_json()).unwrap();
    let keys: Vec<&str> = ad.characteristics.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Состояние", "Бренд", "Гарантия"]);
}

#[test]
fn advertisement_characteristics_serialize_back_to_object() {
    let ad: Advertisement = serde_json::from_value(ad_json()).unwrap();
    let value = serde_json::to_value(&ad).unwrap();
    assert_eq!(value["characteristics"]["Бренд"], "Stels");
    assert_eq!(value["categoryId"], 3);
}

#[test]
fn advertisement_missing_optional_collections_default_to_empty() {
    let mut json = ad_json();
    let obj = json.as_object_mut().unwrap();
    obj.remove("images");
    obj.remove("characteristics");
    obj.remove("moderationHistory");
    obj.remove("priority");
    let ad: Advertisement = serde_json::from_value(json).unwrap();
    assert!(ad.images.is_empty());
    assert!(ad.characteristics.is_empty());
    assert!(ad.moderation_history.is_empty());
    assert_eq!(ad.priority, AdPriority::Normal);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn ads_response_tolerates_missing_pagination() {
    let resp: AdsResponse = serde_json::from_value(serde_json::json!({ "ads": [ad_json()] })).unwrap();
    assert_eq!(resp.ads.len(), 1);
    assert_eq!(resp.pagination, None);
}

#[test]
fn ads_response_tolerates_missing_ads() {
    let resp: AdsResponse = serde_json::from_value(serde_json::json!({
        "pagination": { "currentPage": 2, "totalPages": 5, "totalItems": 48, "itemsPerPage": 10 }
    }))
    .unwrap();
    assert!(resp.ads.is_empty());
    assert_eq!(
        resp.pagination,
        Some(PaginationResponse { current_page: 2, total_pages: 5, total_items: 48, items_per_page: 10 })
    );
}

#[test]
fn action_response_decodes_message_and_ad() {
    let resp: ActionResponse = serde_json::from_value(serde_json::json!({
        "message": "Ad approved",
        "ad": ad_json()
    }))
    .unwrap();
    assert_eq!(resp.message, "Ad approved");
    assert_eq!(resp.ad.id, 42);
}

#[test]
fn moderation_request_omits_comment_for_fixed_reason() {
    let body = ModerationRequest::new(RejectReason::WrongCategory, "ignored");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "reason": "Неверная категория" })
    );
}

#[test]
fn moderation_request_carries_comment_for_other() {
    let body = ModerationRequest::new(RejectReason::Other, "Дубликат объявления");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "reason": "Другое", "comment": "Дубликат объявления" })
    );
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_summary_accepts_float_encoded_counts() {
    let summary: StatsSummary = serde_json::from_value(serde_json::json!({
        "totalReviewed": 120.0,
        "totalReviewedToday": 4,
        "totalReviewedThisWeek": 30,
        "totalReviewedThisMonth": 120,
        "approvedPercentage": 61.5,
        "rejectedPercentage": 20.25,
        "requestChangesPercentage": 18.25,
        "averageReviewTime": 7200
    }))
    .unwrap();
    assert_eq!(summary.total_reviewed, 120);
    assert!((summary.average_review_time - 7200.0).abs() < f64::EPSILON);
}

#[test]
fn stats_summary_rejects_fractional_counts() {
    let result = serde_json::from_value::<StatsSummary>(serde_json::json!({
        "totalReviewed": 1.5,
        "approvedPercentage": 0,
        "rejectedPercentage": 0,
        "averageReviewTime": 0
    }));
    assert!(result.is_err());
}

#[test]
fn activity_data_decodes_camel_case_series() {
    let rows: Vec<ActivityData> = serde_json::from_value(serde_json::json!([
        { "date": "2025-10-01", "approved": 5, "rejected": 2, "requestChanges": 1 }
    ]))
    .unwrap();
    assert_eq!(rows[0].request_changes, 1);
}

#[test]
fn category_counts_keep_insertion_order() {
    let counts: CategoryCounts = serde_json::from_str(
        r#"{ "Электроника": 12, "Авто": 3, "Недвижимость": 7 }"#,
    )
    .unwrap();
    let names: Vec<&str> = counts.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Электроника", "Авто", "Недвижимость"]);
    assert_eq!(counts.0[2].1, 7);
}

#[test]
fn category_counts_empty_object_is_empty() {
    let counts: CategoryCounts = serde_json::from_str("{}").unwrap();
    assert!(counts.is_empty());
}

#[test]
fn moderator_decodes_with_statistics() {
    let moderator: Moderator = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Алексей Петров",
        "email": "a.petrov@example.com",
        "role": "moderator",
        "statistics": {
            "totalReviewed": 1200,
            "todayReviewed": 12,
            "thisWeekReviewed": 80,
            "thisMonthReviewed": 310,
            "averageReviewTime": 95,
            "approvalRate": 71.4
        },
        "permissions": ["approve_ads", "reject_ads"]
    }))
    .unwrap();
    assert_eq!(moderator.name, "Алексей Петров");
    assert_eq!(moderator.statistics.this_month_reviewed, 310);
    assert_eq!(moderator.permissions.len(), 2);
}
