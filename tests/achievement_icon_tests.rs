//! Integration tests for the achievement icon resource.
//!
//! These tests run every operation against a mock IGDB server and verify
//! decoding, validation and error classification.

mod common;

use common::{received_query, serve, unreachable};
use igdb::query::{set_fields, set_filter, set_limit, set_offset, set_search, FilterOperator};
use igdb::rest::resources::AchievementIcon;
use igdb::rest::{Resource, ResourceOperation};
use igdb::{ErrorKind, QueryOption};
use std::collections::HashSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ICON_GET: &str = r#"[
    {
        "id": 7346,
        "alpha_channel": false,
        "animated": false,
        "height": 256,
        "image_id": "ojxffjhtxc5sxvhjbqkf",
        "url": "//images.igdb.com/igdb/image/upload/t_thumb/ojxffjhtxc5sxvhjbqkf.jpg",
        "width": 256
    }
]"#;

const ICON_LIST: &str = r#"[
    {
        "id": 1721,
        "height": 128,
        "image_id": "ufrwnobtxyqrbw8yqcru",
        "url": "//images.igdb.com/igdb/image/upload/t_thumb/ufrwnobtxyqrbw8yqcru.jpg",
        "width": 128
    },
    {
        "id": 2777,
        "height": 64,
        "image_id": "ahq2tzqigpp4dfmxsbcm",
        "url": "//images.igdb.com/igdb/image/upload/t_thumb/ahq2tzqigpp4dfmxsbcm.jpg",
        "width": 64
    }
]"#;

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_valid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievement_icons/7346"))
        .and(query_param("fields", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ICON_GET))
        .expect(1)
        .mount(&server)
        .await;
    let client = common::client_for(&server);

    let icon = AchievementIcon::get(&client, 7346, &[set_fields(["name"])])
        .await
        .unwrap();

    assert_eq!(icon.id, Some(7346));
    assert_eq!(icon.image_id.as_deref(), Some("ojxffjhtxc5sxvhjbqkf"));
    assert_eq!(icon.height, Some(256));
}

#[tokio::test]
async fn test_get_error_cases() {
    struct Case {
        name: &'static str,
        body: &'static str,
        id: i64,
        options: fn() -> Vec<QueryOption>,
        want: ErrorKind,
    }

    let cases = [
        Case {
            name: "invalid id",
            body: "",
            id: -1,
            options: Vec::new,
            want: ErrorKind::NegativeId,
        },
        Case {
            name: "empty response",
            body: "",
            id: 7346,
            options: Vec::new,
            want: ErrorKind::InvalidResponse,
        },
        Case {
            name: "invalid option",
            body: "",
            id: 7346,
            options: || vec![set_offset(99_999)],
            want: ErrorKind::OutOfRange,
        },
        Case {
            name: "no results",
            body: "[]",
            id: 0,
            options: Vec::new,
            want: ErrorKind::NoResults,
        },
    ];

    for case in cases {
        let (_server, client) = serve(200, case.body).await;

        let err = AchievementIcon::get(&client, case.id, &(case.options)())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), case.want, "case: {}", case.name);
        assert_eq!(err.operation, ResourceOperation::Get, "case: {}", case.name);
        assert_eq!(err.resource, "AchievementIcon");
    }
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_valid_response_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievement_icons/1721,2777"))
        .and(query_param("fields", "*"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ICON_LIST))
        .expect(1)
        .mount(&server)
        .await;
    let client = common::client_for(&server);

    let icons = AchievementIcon::list(&client, &[1721, 2777], &[set_limit(5)])
        .await
        .unwrap();

    let ids: Vec<_> = icons.iter().map(|icon| icon.id).collect();
    assert_eq!(ids, [Some(1721), Some(2777)]);
}

#[tokio::test]
async fn test_list_error_cases() {
    struct Case {
        name: &'static str,
        body: &'static str,
        ids: &'static [i64],
        options: fn() -> Vec<QueryOption>,
        want: ErrorKind,
    }

    let cases = [
        Case {
            name: "zero ids",
            body: "",
            ids: &[],
            options: Vec::new,
            want: ErrorKind::EmptyIds,
        },
        Case {
            name: "invalid id",
            body: "",
            ids: &[-500],
            options: Vec::new,
            want: ErrorKind::NegativeId,
        },
        Case {
            name: "empty response",
            body: "",
            ids: &[1721, 2777],
            options: Vec::new,
            want: ErrorKind::InvalidResponse,
        },
        Case {
            name: "invalid option",
            body: "",
            ids: &[1721, 2777],
            options: || vec![set_offset(99_999)],
            want: ErrorKind::OutOfRange,
        },
        Case {
            name: "no results",
            body: "[]",
            ids: &[0, 9_999_999],
            options: Vec::new,
            want: ErrorKind::NoResults,
        },
    ];

    for case in cases {
        let (_server, client) = serve(200, case.body).await;

        let err = AchievementIcon::list(&client, case.ids, &(case.options)())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), case.want, "case: {}", case.name);
    }
}

#[tokio::test]
async fn test_validation_failures_send_nothing() {
    let (_server, client) = unreachable().await;

    let err = AchievementIcon::list(&client, &[], &[]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyIds);

    let err = AchievementIcon::get(&client, -3, &[]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NegativeId);

    let err = AchievementIcon::index(&client, &[set_limit(0)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = AchievementIcon::count(&client, &[set_filter("", FilterOperator::Equals, "1")])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidQuery);
}

// ============================================================================
// Index
// ============================================================================

#[tokio::test]
async fn test_index_valid_response() {
    let (server, client) = serve(200, ICON_LIST).await;

    let icons = AchievementIcon::index(&client, &[set_limit(5)]).await.unwrap();

    assert_eq!(icons.len(), 2);
    assert_eq!(icons[1].width, Some(64));
    assert_eq!(
        received_query(&server).await,
        vec![
            ("fields".to_string(), "*".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_index_sends_values_untrimmed() {
    let (server, client) = serve(200, ICON_LIST).await;

    AchievementIcon::index(
        &client,
        &[
            set_filter("name", FilterOperator::Equals, "  Mario  "),
            set_search("  zelda "),
        ],
    )
    .await
    .unwrap();

    let pairs = [
        ("fields", "*"),
        ("filter[name][eq]", "  Mario  "),
        ("search", "  zelda "),
    ];
    let expected: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(received_query(&server).await, expected);
}

#[tokio::test]
async fn test_index_error_cases() {
    let cases: [(&str, &str, fn() -> Vec<QueryOption>, ErrorKind); 3] = [
        ("empty response", "", Vec::new, ErrorKind::InvalidResponse),
        (
            "invalid option",
            "",
            || vec![set_offset(99_999)],
            ErrorKind::OutOfRange,
        ),
        ("no results", "[]", Vec::new, ErrorKind::NoResults),
    ];

    for (name, body, options, want) in cases {
        let (_server, client) = serve(200, body).await;

        let err = AchievementIcon::index(&client, &options()).await.unwrap_err();

        assert_eq!(err.kind(), want, "case: {name}");
    }
}

// ============================================================================
// Count
// ============================================================================

#[tokio::test]
async fn test_count_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievement_icons/count"))
        .and(query_param("filter[popularity][gt]", "75"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 100}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = common::client_for(&server);

    let count = AchievementIcon::count(
        &client,
        &[set_filter("popularity", FilterOperator::GreaterThan, "75")],
    )
    .await
    .unwrap();

    assert_eq!(count, 100);
}

#[tokio::test]
async fn test_count_error_cases() {
    let cases: [(&str, &str, fn() -> Vec<QueryOption>, ErrorKind); 3] = [
        ("empty response", "", Vec::new, ErrorKind::InvalidResponse),
        (
            "invalid option",
            "",
            || vec![set_limit(100)],
            ErrorKind::OutOfRange,
        ),
        ("no results", "[]", Vec::new, ErrorKind::NoResults),
    ];

    for (name, body, options, want) in cases {
        let (_server, client) = serve(200, body).await;

        let err = AchievementIcon::count(&client, &options()).await.unwrap_err();

        assert_eq!(err.kind(), want, "case: {name}");
        assert_eq!(err.operation, ResourceOperation::Count);
    }
}

#[tokio::test]
async fn test_count_sends_only_filters_and_search() {
    let (server, client) = serve(200, r#"{"count": 3}"#).await;

    AchievementIcon::count(
        &client,
        &[
            set_fields(["url"]),
            set_limit(10),
            set_filter("width", FilterOperator::GreaterThanOrEqual, "128"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        received_query(&server).await,
        vec![("filter[width][gte]".to_string(), "128".to_string())]
    );
}

// ============================================================================
// Fields
// ============================================================================

#[tokio::test]
async fn test_fields_cases() {
    let cases: [(&str, &str, &[&str]); 4] = [
        ("happy path", r#"["name", "slug", "url"]"#, &["url", "slug", "name"]),
        (
            "dot operator",
            r#"["logo.url", "background.id"]"#,
            &["background.id", "logo.url"],
        ),
        ("asterisk", r#"["*"]"#, &["*"]),
        ("no results", "[]", &[]),
    ];

    for (name, body, want) in cases {
        let (_server, client) = serve(200, body).await;

        let fields: HashSet<String> = AchievementIcon::fields(&client)
            .await
            .unwrap()
            .into_iter()
            .collect();
        let want: HashSet<String> = want.iter().map(ToString::to_string).collect();

        assert_eq!(fields, want, "case: {name}");
    }
}

#[tokio::test]
async fn test_fields_empty_response() {
    let (_server, client) = serve(200, "").await;

    let err = AchievementIcon::fields(&client).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_fields_hits_meta_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievement_icons/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["id"]"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = common::client_for(&server);

    assert_eq!(AchievementIcon::fields(&client).await.unwrap(), ["id"]);
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_server_error_is_transport() {
    let (_server, client) = serve(500, "Internal Server Error").await;

    let err = AchievementIcon::get(&client, 7346, &[]).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err.into_inner() {
        igdb::IgdbError::Transport(http) => assert_eq!(http.status(), Some(500)),
        other => panic!("unexpected error: {other:?}"),
    }
}
