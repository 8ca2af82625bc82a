mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

// Released 2024-01-01: 2024-01-15 falls in week 3, 2024-01-30 in week 5.
const RELEASE: &str = "2024-01-01";

async fn released_movie(app: &TestApp, duration_min: i32) -> String {
    app.create_movie(&json!({
        "title": "Le Voyage",
        "release_date": RELEASE,
        "duration_min": duration_min
    })).await
}

#[tokio::test]
async fn test_schedules_screening_in_empty_hall() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (status, created) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::OK, "admission failed: {created}");
    assert_eq!(created["movie_id"], movie_id.as_str());
    assert_eq!(created["hall_id"], hall_id.as_str());
    assert_eq!(created["starts_at"], "2024-01-22T10:00:00");
    assert_eq!(created["duration_min"], 120);
    assert_eq!(created["end_time"], "12:00");
    assert_eq!(created["spectators_count"], 0);
    assert!(created["id"].as_str().is_some(), "store must assign an id");
}

#[tokio::test]
async fn test_rejects_overlapping_screening_in_same_hall() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::OK);

    // Starts one minute before the existing screening ends.
    let (status, body) = app.schedule(&movie_id, &hall_id, "2024-01-22", "11:59").await;
    assert_eq!(status, StatusCode::CONFLICT, "expected overlap conflict: {body}");

    // Back-to-back is allowed: intervals are half-open.
    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "12:00").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_same_slot_in_another_hall_is_allowed() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_a = app.create_hall("Salle 1", 100).await;
    let hall_b = app.create_hall("Salle 2", 80).await;

    let (status, _) = app.schedule(&movie_id, &hall_a, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.schedule(&movie_id, &hall_b, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rejects_unknown_movie_and_hall() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (status, _) = app.schedule("missing-movie", &hall_id, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.schedule(&movie_id, "missing-hall", "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enforces_operating_hours() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    // One minute before opening.
    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "09:59").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Would end at 23:02.
    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "21:02").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Ends exactly at closing.
    let (status, created) = app.schedule(&movie_id, &hall_id, "2024-01-22", "21:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["end_time"], "23:00");

    // Would wrap past midnight (empty day, so only the hours rule can fire).
    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-23", "22:30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weekly_cap_in_week_three() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_a = app.create_hall("Salle 1", 100).await;
    let hall_b = app.create_hall("Salle 2", 80).await;

    for time in ["10:00", "12:30", "15:00"] {
        let (status, body) = app.schedule(&movie_id, &hall_a, "2024-01-15", time).await;
        assert_eq!(status, StatusCode::OK, "screening at {time} refused: {body}");
    }

    // Fourth same-day screening of the movie in the same hall is over the cap.
    let (status, _) = app.schedule(&movie_id, &hall_a, "2024-01-15", "17:30").await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The cap counts per hall; another hall still has room.
    let (status, _) = app.schedule(&movie_id, &hall_b, "2024-01-15", "17:30").await;
    assert_eq!(status, StatusCode::OK);

    // And per day; the next day starts fresh.
    let (status, _) = app.schedule(&movie_id, &hall_a, "2024-01-16", "17:30").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_week_five_allows_one_screening_per_day() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-30", "10:00").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-30", "13:00").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_missing_release_date_skips_weekly_cap() {
    let app = TestApp::new().await;
    let movie_id = app.create_movie(&json!({
        "title": "Avant-première surprise",
        "duration_min": 90
    })).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    for time in ["10:00", "12:00", "14:00", "16:00"] {
        let (status, body) = app.schedule(&movie_id, &hall_id, "2024-01-15", time).await;
        assert_eq!(status, StatusCode::OK, "screening at {time} refused: {body}");
    }
}

#[tokio::test]
async fn test_duration_fallback_for_movie_without_one() {
    let app = TestApp::new().await;
    let movie_id = app.create_movie(&json!({
        "title": "Métrage inconnu"
    })).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    // No duration anywhere: the candidate cannot be built.
    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The request may state one when the movie does not.
    let (status, created) = app.request("POST", "/api/v1/screenings", Some(&json!({
        "movie_id": movie_id,
        "hall_id": hall_id,
        "date": "2024-01-22",
        "time": "10:00",
        "duration_min": 100
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["duration_min"], 100);
    assert_eq!(created["end_time"], "11:40");
}

#[tokio::test]
async fn test_listing_joins_movie_and_hall_details() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    app.schedule(&movie_id, &hall_id, "2024-01-23", "10:00").await;

    let (status, listed) = app.request("GET", "/api/v1/screenings", None).await;
    assert_eq!(status, StatusCode::OK);
    let screenings = listed.as_array().unwrap();
    assert_eq!(screenings.len(), 2);
    assert_eq!(screenings[0]["movie_title"], "Le Voyage");
    assert_eq!(screenings[0]["hall_name"], "Salle 1");

    let (status, filtered) = app.request("GET", "/api/v1/screenings?date=2024-01-22", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_spectators_update() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (_, created) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    let screening_id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app.request(
        "PUT",
        &format!("/api/v1/screenings/{}/spectators", screening_id),
        Some(&json!({ "spectators_count": 57 })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["spectators_count"], 57);

    let (status, _) = app.request(
        "PUT",
        &format!("/api/v1/screenings/{}/spectators", screening_id),
        Some(&json!({ "spectators_count": -1 })),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancelling_a_screening_frees_its_slot() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (_, created) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    let screening_id = created["id"].as_str().unwrap().to_string();

    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "11:00").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.request("DELETE", &format!("/api/v1/screenings/{}", screening_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.schedule(&movie_id, &hall_id, "2024-01-22", "11:00").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_calendar_export() {
    let app = TestApp::new().await;
    let movie_id = released_movie(&app, 120).await;
    let hall_id = app.create_hall("Salle 1", 100).await;

    let (_, created) = app.schedule(&movie_id, &hall_id, "2024-01-22", "10:00").await;
    let screening_id = created["id"].as_str().unwrap().to_string();

    let (status, ics) = app.request_text(&format!("/api/v1/screenings/{}/calendar.ics", screening_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("SUMMARY:Le Voyage"));
}
