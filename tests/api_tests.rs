//! Integration tests for strava-rs against a local mock of the Strava API.
//!
//! Every test starts its own `wiremock` server and points a client at it,
//! so no network access or credentials are needed.
//!
//! Run with: cargo test --test api_tests
//! Log output: RUST_LOG=strava_rs=trace cargo test --test api_tests -- --nocapture

use std::sync::{Arc, Once};

use chrono::{TimeZone, Utc};
use futures_util::StreamExt;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use strava_rs::prelude::*;
use strava_rs::client::{Limit, Usage};

static INIT: Once = Once::new();

const TOKEN: &str = "test-token";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start a mock server and a client pointed at it.
async fn setup() -> (MockServer, StravaClient) {
    init_logging();
    let server = MockServer::start().await;
    let auth = StaticAuthenticator::new(TOKEN).unwrap();
    let client = StravaClient::with_authenticator(
        Arc::new(auth),
        ClientConfig::default().with_base_url(server.uri()),
    )
    .unwrap();
    (server, client)
}

fn activity_json(id: i64, activity_type: &str, distance: f64, moving_time: u64) -> Value {
    json!({
        "id": id,
        "resource_state": 2,
        "name": format!("Activity {id}"),
        "type": activity_type,
        "distance": distance,
        "moving_time": moving_time,
        "elapsed_time": moving_time,
        "start_date": "2024-06-04T07:00:00Z",
        "athlete": {"id": 1, "resource_state": 1}
    })
}

fn activity_page(first_id: i64, count: usize) -> Value {
    Value::Array(
        (0..count as i64)
            .map(|i| activity_json(first_id + i, "Ride", 1000.0, 600))
            .collect(),
    )
}

fn entries(first_rank: u32, count: u32) -> Value {
    Value::Array(
        (first_rank..first_rank + count)
            .map(|rank| {
                json!({
                    "athlete_name": format!("Athlete {rank}"),
                    "athlete_id": rank,
                    "elapsed_time": 300 + rank,
                    "moving_time": 300 + rank,
                    "activity_id": 1000 + rank,
                    "effort_id": 2000 + rank,
                    "rank": rank
                })
            })
            .collect(),
    )
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}

// =============================================================================
// Pagination
// =============================================================================

mod pagination_tests {
    use super::*;

    async fn mount_history(server: &MockServer) {
        let pages = [(1, 200), (2, 200), (3, 47), (4, 0)];
        let mut first_id = 1;
        for (page, count) in pages {
            Mock::given(method("GET"))
                .and(path("/athlete/activities"))
                .and(query_param("page", page.to_string()))
                .and(query_param("per_page", "200"))
                .and(query_param("access_token", TOKEN))
                .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(first_id, count)))
                .expect(1)
                .mount(server)
                .await;
            first_id += count as i64;
        }
    }

    #[tokio::test]
    async fn test_list_all_stops_at_first_empty_page() {
        let (server, client) = setup().await;
        mount_history(&server).await;

        let activities = client.activities().all().await.unwrap();
        assert_eq!(activities.len(), 447);
        assert_eq!(activities[0].meta.id, ActivityId::new(1));
        assert_eq!(activities[446].meta.id, ActivityId::new(447));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 4);
        let pages: Vec<String> = requests
            .iter()
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "page")
                    .map(|(_, v)| v.into_owned())
            })
            .collect();
        assert_eq!(pages, vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_observer_sees_every_item_in_order() {
        let (server, client) = setup().await;
        mount_history(&server).await;

        let mut seen = Vec::new();
        let activities = client
            .activities()
            .list_all_with(&ActivitiesQuery::default(), |a| seen.push(a.meta.id.get()))
            .await
            .unwrap();

        assert_eq!(seen.len(), 447);
        assert_eq!(seen, activities.iter().map(|a| a.meta.id.get()).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_total_count() {
        let (server, client) = setup().await;
        mount_history(&server).await;

        assert_eq!(client.activities().total_count().await.unwrap(), 447);
    }

    #[tokio::test]
    async fn test_list_stream_yields_everything() {
        let (server, client) = setup().await;
        mount_history(&server).await;

        let ids: Vec<i64> = client
            .activities()
            .list_stream(&ActivitiesQuery::default())
            .map(|r| r.unwrap().meta.id.get())
            .collect()
            .await;
        assert_eq!(ids.len(), 447);
        assert_eq!(request_count(&server).await, 4);
    }

    #[tokio::test]
    async fn test_failed_page_fails_the_aggregate() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete/activities"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(1, 200)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/athlete/activities"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Server Error"})))
            .mount(&server)
            .await;

        let err = client.activities().all().await.unwrap_err();
        assert!(err.is_server_error());
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_friends_is_bounded() {
        let (server, client) = setup().await;

        for page in ["1", "2"] {
            Mock::given(method("GET"))
                .and(path("/activities/following"))
                .and(query_param("page", page))
                .and(query_param("per_page", "20"))
                .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(1, 20)))
                .expect(1)
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/activities/following"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(1, 20)))
            .expect(0)
            .mount(&server)
            .await;

        let feed = client.activities().friends(30).await.unwrap();
        assert_eq!(feed.len(), 30);
    }

    #[tokio::test]
    async fn test_page_arguments_validated_before_io() {
        let (server, client) = setup().await;
        let query = ActivitiesQuery::default();

        for (page, per_page) in [(1, 0), (1, 201), (0, 30)] {
            let err = client
                .activities()
                .list(&query, page, per_page)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{page}/{per_page}: {err:?}");
        }
        assert!(matches!(
            client.clubs().activities(ClubId::new(1), 1, 500).await,
            Err(Error::InvalidInput(_))
        ));

        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_single_page_query_is_idempotent() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let query = ActivitiesQuery::between(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        );
        client.activities().list(&query, 2, 50).await.unwrap();
        client.activities().list(&query, 2, 50).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, requests[1].url);
        assert_eq!(
            requests[0].url.query(),
            Some("before=1706745600&after=1704067200&page=2&per_page=50&access_token=test-token")
        );
    }
}

// =============================================================================
// Leaderboards
// =============================================================================

mod leaderboard_tests {
    use super::*;

    const SEGMENT: &str = "/segments/229781/leaderboard";

    async fn mount_probe(server: &MockServer, entry_count: u32) {
        Mock::given(method("GET"))
            .and(path(SEGMENT))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "effort_count": entry_count * 3,
                "entry_count": entry_count,
                "entries": entries(1, 1)
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_page(server: &MockServer, page: u32, first_rank: u32, count: u32, expect: u64) {
        Mock::given(method("GET"))
            .and(path(SEGMENT))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "effort_count": 1050,
                "entry_count": 350,
                "entries": entries(first_rank, count)
            })))
            .expect(expect)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_full_leaderboard_covers_probed_total() {
        let (server, client) = setup().await;
        mount_probe(&server, 350).await;
        mount_page(&server, 1, 1, 200, 1).await;
        mount_page(&server, 2, 201, 150, 1).await;
        mount_page(&server, 3, 351, 0, 0).await;

        let board = client
            .segments()
            .full_leaderboard(SegmentId::new(229781))
            .await
            .unwrap();

        assert_eq!(board.entry_count, 350);
        assert_eq!(board.effort_count, 1050);
        assert_eq!(board.entries.len(), 350);
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[349].rank, 350);
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn test_shrinking_board_stops_on_empty_page() {
        let (server, client) = setup().await;
        mount_probe(&server, 500).await;
        mount_page(&server, 1, 1, 200, 1).await;
        mount_page(&server, 2, 201, 0, 1).await;
        mount_page(&server, 3, 401, 100, 0).await;

        let board = client
            .segments()
            .leaderboard(SegmentId::new(229781), &LeaderboardQuery::default())
            .await
            .unwrap();
        assert_eq!(board.entries.len(), 200);
    }

    #[tokio::test]
    async fn test_huge_reported_count_with_empty_board() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(SEGMENT))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "effort_count": 4000000000u32,
                "entry_count": 4000000000u32,
                "entries": []
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(SEGMENT))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "effort_count": 4000000000u32,
                "entry_count": 4000000000u32,
                "entries": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let board = client
            .segments()
            .full_leaderboard(SegmentId::new(229781))
            .await
            .unwrap();
        assert_eq!(board.entry_count, 4000000000);
        assert!(board.entries.is_empty());
    }

    #[tokio::test]
    async fn test_filters_sent_only_when_set() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(SEGMENT))
            .and(query_param("gender", "F"))
            .and(query_param("weight_class", "55_64"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "effort_count": 2, "entry_count": 2, "entries": entries(1, 2)
            })))
            .mount(&server)
            .await;

        let query = LeaderboardQuery::default()
            .gender(GenderFilter::Female)
            .weight_class(WeightClass::From55To64);
        let page = client
            .segments()
            .leaderboard_page(SegmentId::new(229781), &query, 1, 50)
            .await
            .unwrap();
        assert_eq!(page.entries.len(), 2);

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default().to_string();
        assert!(!query.contains("age_group"));
        assert!(!query.contains("date_range"));
        assert!(!query.contains("following"));
    }

    #[tokio::test]
    async fn test_entry_count_is_one_request() {
        let (server, client) = setup().await;
        mount_probe(&server, 12345).await;

        let count = client
            .segments()
            .entry_count(SegmentId::new(229781))
            .await
            .unwrap();
        assert_eq!(count, 12345);
        assert_eq!(request_count(&server).await, 1);
    }
}

// =============================================================================
// Rate limits
// =============================================================================

mod rate_limit_tests {
    use super::*;

    #[tokio::test]
    async fn test_headers_recorded_and_kept_when_missing() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-RateLimit-Usage", "10,20")
                    .insert_header("X-RateLimit-Limit", "600,30000")
                    .set_body_json(json!({"id": 1, "resource_state": 3})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/athlete/clubs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut changes = client.rate_limits().subscribe();

        client.athletes().current().await.unwrap();
        assert!(changes.has_changed().unwrap());
        assert_eq!(client.rate_limits().usage(), Usage::new(10, 20));
        assert_eq!(client.rate_limits().limit(), Limit::new(600, 30000));
        assert_eq!(client.rate_limits().status().short_term_remaining(), Some(590));

        changes.borrow_and_update();
        client.clubs().list().await.unwrap();
        assert!(!changes.has_changed().unwrap());
        assert_eq!(client.rate_limits().usage(), Usage::new(10, 20));
    }

    #[tokio::test]
    async fn test_headers_recorded_on_error_responses() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("X-RateLimit-Usage", "601,1200")
                    .insert_header("X-RateLimit-Limit", "600,30000")
                    .set_body_json(json!({"message": "Rate Limit Exceeded"})),
            )
            .mount(&server)
            .await;

        match client.athletes().current().await {
            Err(Error::RateLimited { usage, limit }) => {
                assert_eq!(usage, Usage::new(601, 1200));
                assert_eq!(limit, Limit::new(600, 30000));
            }
            other => panic!("Expected RateLimited, got {other:?}"),
        }
        assert!(client.rate_limits().status().is_exhausted());
    }

    #[tokio::test]
    async fn test_clones_share_the_tracker() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete/friends"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-RateLimit-Usage", "3,4")
                    .set_body_json(json!([])),
            )
            .mount(&server)
            .await;

        let other = client.clone();
        other.athletes().friends().await.unwrap();
        assert_eq!(client.rate_limits().usage(), Usage::new(3, 4));
    }
}

// =============================================================================
// Errors and decoding
// =============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_mapping() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/activities/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Record Not Found",
                "errors": [{"resource": "Activity", "field": "id", "code": "invalid"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/athlete"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Authorization Error",
                "errors": [{"resource": "Athlete", "field": "access_token", "code": "invalid"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/activities/1"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad"))
            .mount(&server)
            .await;

        match client.activities().get(ActivityId::new(404), false).await {
            Err(Error::NotFound(message)) => assert_eq!(message, "Record Not Found (id: invalid)"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
        match client.athletes().current().await {
            Err(Error::Unauthorized(message)) => assert!(message.contains("access_token")),
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
        match client
            .activities()
            .update(ActivityId::new(1), ActivityParameter::Name, "x")
            .await
        {
            Err(Error::Api { status, body, .. }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad");
            }
            other => panic!("Expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_bodies() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete/clubs"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gear/b1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client.clubs().list().await.unwrap().is_empty());

        let err = client.gear().get(&GearId::new("b1")).await.unwrap_err();
        match &err {
            Error::NoContent(what) => assert_eq!(what, "gear b1"),
            other => panic!("Expected NoContent, got {other:?}"),
        }
        assert!(err.is_not_found());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_empty_object_names_the_resource() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/segments/229781"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = client.athletes().current().await.unwrap_err();
        assert_eq!(err.to_string(), "No content: current athlete");

        let err = client.segments().get(SegmentId::new(229781)).await.unwrap_err();
        assert_eq!(err.to_string(), "No content: segment 229781");
    }

    #[test]
    fn test_decode_empty_string_is_invalid_input() {
        assert!(matches!(
            strava_rs::client::decode::<Athlete>(""),
            Err(Error::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/routes/5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": "))
            .mount(&server)
            .await;

        assert!(matches!(
            client.routes().get(RouteId::new(5)).await,
            Err(Error::Json(_))
        ));
    }
}

// =============================================================================
// Activities
// =============================================================================

mod activities_tests {
    use super::*;

    #[tokio::test]
    async fn test_weekly_progress_buckets() {
        let (server, client) = setup().await;
        // Thursday noon; the week starts Monday 2024-06-03 00:00 UTC.
        let now = Utc.with_ymd_and_hms(2024, 6, 6, 12, 0, 0).unwrap();

        Mock::given(method("GET"))
            .and(path("/athlete/activities"))
            .and(query_param("after", "1717372800"))
            .and(query_param("before", "1717675200"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                activity_json(1, "Ride", 10000.0, 3600),
                activity_json(2, "Run", 5000.0, 3600),
                activity_json(3, "Hike", 2000.0, 3600),
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/athlete/activities"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client.activities().weekly_progress_at(now).await.unwrap();
        assert_eq!(summary.ride_distance, 10000.0);
        assert_eq!(summary.run_distance, 5000.0);
        assert_eq!(summary.total_time, std::time::Duration::from_secs(10800));
        assert_eq!(summary.activity_count(), 3);
        assert_eq!(summary.start, Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_update_uses_parameter_key() {
        let (server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/activities/55"))
            .and(query_param("commute", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 55, "resource_state": 3, "commute": true, "type": "Ride"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let activity = client
            .activities()
            .update(ActivityId::new(55), ActivityParameter::Commute, true)
            .await
            .unwrap();
        assert!(activity.summary.commute);
    }

    #[tokio::test]
    async fn test_create_manual_activity() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities"))
            .and(query_param("name", "Treadmill"))
            .and(query_param("type", "run"))
            .and(query_param("start_date_local", "2024-06-01T18:00:00Z"))
            .and(query_param("elapsed_time", "1800"))
            .and(query_param("distance", "5000"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 77, "resource_state": 3, "name": "Treadmill", "type": "Run"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let new = NewActivity::new(
            "Treadmill",
            ActivityType::Run,
            Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap(),
            1800,
        )
        .with_distance(5000.0);

        let created = client.activities().create(&new).await.unwrap();
        assert_eq!(created.summary.meta.id, ActivityId::new(77));
    }

    #[tokio::test]
    async fn test_unknown_type_rejected_before_io() {
        let (server, client) = setup().await;

        let err = client
            .activities()
            .update_type(ActivityId::new(1), ActivityType::Unknown)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_comment_and_kudos() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/9/comments"))
            .and(query_param("text", "Nice ride!"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 1, "activity_id": 9, "text": "Nice ride!"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/activities/9/kudos"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let comment = client
            .activities()
            .post_comment(ActivityId::new(9), "Nice ride!")
            .await
            .unwrap();
        assert_eq!(comment.text, "Nice ride!");
        client.activities().give_kudos(ActivityId::new(9)).await.unwrap();
    }
}

// =============================================================================
// Streams
// =============================================================================

mod streams_tests {
    use super::*;

    #[tokio::test]
    async fn test_activity_streams_path_and_resolution() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/activities/42/streams/time,heartrate"))
            .and(query_param("resolution", "low"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"type": "time", "data": [0, 1, 2], "series_type": "distance", "original_size": 3, "resolution": "low"},
                {"type": "heartrate", "data": [110, 112, 115], "series_type": "distance", "original_size": 3, "resolution": "low"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let types = StreamTypes::new()
            .with(StreamType::Heartrate)
            .with(StreamType::Time);
        let streams = client
            .streams()
            .activity(ActivityId::new(42), &types, StreamResolution::Low)
            .await
            .unwrap();

        assert_eq!(streams.len(), 2);
        assert_eq!(streams[1].stream_type, StreamType::Heartrate);
        assert_eq!(streams[1].data[2].as_f64(), Some(115.0));
    }

    #[tokio::test]
    async fn test_full_resolution_sends_no_parameter() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/segment_efforts/8/streams/latlng,altitude"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let types = StreamTypes::from_iter([StreamType::Altitude, StreamType::LatLng]);
        client
            .streams()
            .effort(EffortId::new(8), &types, StreamResolution::All)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].url.query().unwrap_or_default().contains("resolution"));
    }

    #[tokio::test]
    async fn test_invalid_stream_sets_rejected_before_io() {
        let (server, client) = setup().await;

        assert!(matches!(
            client
                .streams()
                .activity(ActivityId::new(1), &StreamTypes::new(), StreamResolution::High)
                .await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            client
                .streams()
                .segment(
                    SegmentId::new(1),
                    &StreamTypes::from(StreamType::Watts),
                    StreamResolution::High
                )
                .await,
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(request_count(&server).await, 0);
    }
}

// =============================================================================
// Uploads
// =============================================================================

mod uploads_tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_upload_file_uses_bearer_and_multipart() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/uploads"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_string_contains("name=\"data_type\""))
            .and(body_string_contains("gpx"))
            .and(body_string_contains("filename=\"evening.gpx\""))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 16486788,
                "external_id": "evening.gpx",
                "error": null,
                "status": "Your activity is still being processed.",
                "activity_id": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("evening.gpx");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"<gpx version=\"1.1\"></gpx>").unwrap();

        let request = UploadRequest::new(DataFormat::Gpx)
            .with_activity_type(ActivityType::Ride)
            .with_commute(true);
        let status = client
            .uploads()
            .upload_file(&file_path, &request)
            .await
            .unwrap();

        assert_eq!(status.id, UploadId::new(16486788));
        assert_eq!(status.state(), UploadState::Processing);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn test_check_status_ready() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/uploads/16486788"))
            .and(query_param("access_token", TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 16486788,
                "status": "Your activity is ready.",
                "activity_id": 6543210
            })))
            .mount(&server)
            .await;

        let status = client
            .uploads()
            .check_status(UploadId::new(16486788))
            .await
            .unwrap();
        assert_eq!(status.state(), UploadState::Ready);
        assert_eq!(status.activity_id, Some(ActivityId::new(6543210)));
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let (server, client) = setup().await;

        let err = client
            .uploads()
            .upload_bytes("empty.fit", Vec::new(), &UploadRequest::new(DataFormat::Fit))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(request_count(&server).await, 0);
    }
}

// =============================================================================
// Athletes, clubs, segments, stats
// =============================================================================

mod resources_tests {
    use super::*;

    #[tokio::test]
    async fn test_current_stats_resolves_athlete_first() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/athlete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 227615, "resource_state": 3, "firstname": "John", "lastname": "Applestrava"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/athletes/227615/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "biggest_ride_distance": 175454.0,
                "ytd_ride_totals": {"count": 42, "distance": 1234567.0, "moving_time": 200000, "elapsed_time": 210000, "elevation_gain": 9000.0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stats = client.stats().current().await.unwrap();
        assert_eq!(stats.ytd_ride_totals.count, 42);
        assert_eq!(stats.biggest_ride_distance, Some(175454.0));
    }

    #[tokio::test]
    async fn test_update_sex() {
        let (server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/athlete"))
            .and(query_param("sex", "F"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "resource_state": 3, "sex": "F"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let athlete = client.athletes().update_sex(Gender::Female).await.unwrap();
        assert_eq!(athlete.summary.sex, Some(Gender::Female));
    }

    #[tokio::test]
    async fn test_explore_bounds_and_categories() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/segments/explore"))
            .and(query_param("bounds", "37.8,-122.5,37.9,-122.4"))
            .and(query_param("min_cat", "1"))
            .and(query_param("max_cat", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "segments": [{"id": 229781, "name": "Hawk Hill", "climb_category": 1, "climb_category_desc": "4"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bounds = Bounds::new(Coordinate::new(37.8, -122.5), Coordinate::new(37.9, -122.4));
        let result = client
            .segments()
            .explore(bounds, Some((ClimbCategory::Cat4, ClimbCategory::Hc)))
            .await
            .unwrap();
        assert_eq!(result.segments[0].id, SegmentId::new(229781));
    }

    #[tokio::test]
    async fn test_efforts_list_all() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/segments/229781/all_efforts"))
            .and(query_param("athlete_id", "134815"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "elapsed_time": 360, "segment": {"id": 229781}},
                {"id": 2, "elapsed_time": 372, "segment": {"id": 229781}}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/segments/229781/all_efforts"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let query = EffortsQuery {
            athlete_id: Some(AthleteId::new(134815)),
            ..Default::default()
        };
        let efforts = client
            .efforts()
            .list_all(SegmentId::new(229781), &query)
            .await
            .unwrap();
        assert_eq!(efforts.len(), 2);
        assert_eq!(efforts[1].id, EffortId::new(2));
    }

    #[tokio::test]
    async fn test_club_members() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/clubs/1/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 5, "resource_state": 2, "firstname": "Ada", "lastname": "L"}
            ])))
            .mount(&server)
            .await;

        let members = client.clubs().members(ClubId::new(1)).await.unwrap();
        assert_eq!(members[0].full_name(), "Ada L");
    }
}
