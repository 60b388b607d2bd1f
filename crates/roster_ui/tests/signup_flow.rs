use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use client_core::HttpActivitiesClient;
use roster_ui::{page::FeedbackKind, AppController, FeedbackPresenter, FormSubmitEvent};
use serde_json::json;
use shared::protocol::EmailQuery;
use tokio::net::TcpListener;

async fn spawn_school_server(signup_status: StatusCode, signup_body: serde_json::Value) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new()
        .route(
            "/activities",
            get(|| async {
                Json(json!({
                    "Chess Club": {
                        "description": "Learn strategies and compete in chess tournaments",
                        "schedule": "Fridays, 3:30 PM - 5:00 PM",
                        "max_participants": 12,
                        "participants": ["Michael Johnson", "Daniel Silva"]
                    }
                }))
            }),
        )
        .route(
            "/activities/:name/signup",
            post(
                move |Path(name): Path<String>, Query(query): Query<EmailQuery>| {
                    let body = signup_body.clone();
                    async move {
                        assert_eq!(name, "Chess Club");
                        assert_eq!(query.email, "joe@example.com");
                        (signup_status, Json(body))
                    }
                },
            ),
        );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn loaded_controller(server_url: &str) -> AppController {
    let client = HttpActivitiesClient::new(server_url).expect("client");
    let app = AppController::new(Arc::new(client), FeedbackPresenter::default());
    assert_eq!(app.init().await.expect("init"), 1);
    assert!(app.fill_form("Chess Club", "joe@example.com").await);
    app
}

#[tokio::test]
async fn signup_success_clears_form_and_shows_server_message() {
    let server_url =
        spawn_school_server(StatusCode::CREATED, json!({"message": "Signed up Joe"})).await;
    let app = loaded_controller(&server_url).await;

    let outcome = app.on_submit(&mut FormSubmitEvent::new()).await;

    assert!(outcome.is_success());
    let feedback = app.feedback();
    assert!(feedback.visible);
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(feedback.text, "Signed up Joe");
    let page = app.page().await;
    assert!(page.form.email.is_empty());
    assert_eq!(page.form.activity.selected_value(), "");
}

#[tokio::test]
async fn signup_rejection_keeps_form_and_shows_detail() {
    let server_url =
        spawn_school_server(StatusCode::BAD_REQUEST, json!({"detail": "Activity full"})).await;
    let app = loaded_controller(&server_url).await;

    let outcome = app.on_submit(&mut FormSubmitEvent::new()).await;

    assert!(!outcome.is_success());
    let feedback = app.feedback();
    assert!(feedback.visible);
    assert_eq!(feedback.kind, FeedbackKind::Error);
    assert_eq!(feedback.text, "Activity full");
    let page = app.page().await;
    assert_eq!(page.form.email, "joe@example.com");
    assert_eq!(page.form.activity.selected_value(), "Chess Club");
}
