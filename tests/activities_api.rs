mod support;

use activity_signup::services::activities_service::CapacityPolicy;
use axum::http::{header, StatusCode};

use support::{app, app_with, get, participants, post};

#[tokio::test]
async fn list_activities_returns_seeded_catalog() {
    let app = app().await;
    let res = get(&app, "/activities").await;

    assert_eq!(res.status, StatusCode::OK);
    let activities = res.json.as_object().expect("activities object");
    for name in ["Chess Club", "Programming Class", "Gym Class", "Basketball", "Tennis Club"] {
        assert!(activities.contains_key(name), "missing {name}");
    }
    assert!(participants(&app, "Chess Club")
        .await
        .contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn every_activity_has_exactly_the_public_fields() {
    let app = app().await;
    let res = get(&app, "/activities").await;

    for (name, activity) in res.json.as_object().unwrap() {
        let mut fields: Vec<&str> = activity
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            vec!["description", "max_participants", "participants", "schedule"],
            "{name}"
        );
    }
}

#[tokio::test]
async fn signup_adds_participant() {
    let app = app().await;
    let res = post(
        &app,
        "/activities/Programming%20Class/signup?email=newstudent@mergington.edu",
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.message().contains("signed up"));
    assert!(participants(&app, "Programming Class")
        .await
        .contains(&"newstudent@mergington.edu".to_string()));
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = app().await;
    let uri = "/activities/Chess%20Club/signup?email=test@mergington.edu";

    let first = post(&app, uri).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.message().contains("signed up"));

    let second = post(&app, uri).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert!(second.detail().contains("already"));
}

#[tokio::test]
async fn signup_for_unknown_activity_is_not_found() {
    let app = app().await;
    let res = post(&app, "/activities/Nonexistent%20Activity/signup?email=x@y.edu").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.detail().contains("not found"));
}

#[tokio::test]
async fn unregister_removes_participant() {
    let app = app().await;
    assert!(participants(&app, "Tennis Club")
        .await
        .contains(&"james@mergington.edu".to_string()));

    let res = post(
        &app,
        "/activities/Tennis%20Club/unregister?email=james@mergington.edu",
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.message().contains("unregistered"));
    assert!(!participants(&app, "Tennis Club")
        .await
        .contains(&"james@mergington.edu".to_string()));
}

#[tokio::test]
async fn unregister_absent_participant_is_rejected() {
    let app = app().await;
    let res = post(
        &app,
        "/activities/Basketball/unregister?email=notregistered@mergington.edu",
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.detail().contains("not signed up"));
}

#[tokio::test]
async fn unregister_from_unknown_activity_is_not_found() {
    let app = app().await;
    let res = post(
        &app,
        "/activities/Nonexistent%20Activity/unregister?email=test@mergington.edu",
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.detail().contains("not found"));
}

#[tokio::test]
async fn unknown_activity_is_not_found_whatever_the_email() {
    let app = app().await;
    for email in ["", "%20", "%20%20"] {
        for action in ["signup", "unregister"] {
            let res = post(
                &app,
                &format!("/activities/Nonexistent%20Activity/{action}?email={email}"),
            )
            .await;
            assert_eq!(res.status, StatusCode::NOT_FOUND, "{action} email={email:?}");
            assert!(res.detail().contains("not found"), "{action} email={email:?}");
        }
    }
}

#[tokio::test]
async fn signup_then_unregister_round_trip() {
    let app = app().await;
    let email = "cycle@mergington.edu";

    assert_eq!(
        post(&app, &format!("/activities/Art%20Club/signup?email={email}")).await.status,
        StatusCode::OK
    );
    assert_eq!(
        post(&app, &format!("/activities/Art%20Club/unregister?email={email}")).await.status,
        StatusCode::OK
    );
    // Back to not-registered, so signing up again is allowed.
    assert_eq!(
        post(&app, &format!("/activities/Art%20Club/signup?email={email}")).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn missing_email_is_unprocessable() {
    let app = app().await;
    let res = post(&app, "/activities/Chess%20Club/signup").await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.detail().contains("email"));
}

#[tokio::test]
async fn blank_email_is_unprocessable() {
    let app = app().await;
    let res = post(&app, "/activities/Chess%20Club/signup?email=%20%20").await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn capacity_is_not_enforced_by_default() {
    let app = app().await;
    // Tennis Club seats 10 and starts with one participant.
    for i in 0..10 {
        let res = post(
            &app,
            &format!("/activities/Tennis%20Club/signup?email=p{i}@mergington.edu"),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
    }
    assert_eq!(participants(&app, "Tennis Club").await.len(), 11);
}

#[tokio::test]
async fn enforced_capacity_rejects_full_activity() {
    let app = app_with(CapacityPolicy::Enforced).await;
    for i in 0..9 {
        let res = post(
            &app,
            &format!("/activities/Tennis%20Club/signup?email=p{i}@mergington.edu"),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
    }

    let res = post(&app, "/activities/Tennis%20Club/signup?email=late@mergington.edu").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.detail().contains("full"));
}

#[tokio::test]
async fn error_responses_are_not_cached() {
    let app = app().await;
    let res = post(&app, "/activities/Nonexistent%20Activity/signup?email=x@y.edu").await;
    assert_eq!(
        res.headers.get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}
