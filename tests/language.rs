mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_text, location, test_app};

#[tokio::test]
async fn unknown_language_leaves_session_unchanged() {
    let app = test_app();
    let cookie = app.login_worker().await;

    let response = app.get("/set_language/hi", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    for code in ["klingon", "fr", "EN-GB", "HINDI", "EN"] {
        let response = app.get(&format!("/set_language/{code}"), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/dashboard"));
    }

    let body = body_text(app.get("/profile", Some(&cookie)).await).await;
    assert!(body.contains(r#"<html lang="hi">"#));
}

#[tokio::test]
async fn language_switch_returns_to_referer() {
    let app = test_app();
    let cookie = app.login_worker().await;

    let request = Request::builder()
        .uri("/set_language/marathi")
        .header(header::COOKIE, &cookie)
        .header(header::REFERER, "/profile")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(location(&response), Some("/profile"));

    let body = body_text(app.get("/profile", Some(&cookie)).await).await;
    assert!(body.contains(r#"<html lang="mr">"#));
}

#[tokio::test]
async fn new_sessions_default_to_english() {
    let app = test_app();
    let cookie = app.login_worker().await;

    let body = body_text(app.get("/profile", Some(&cookie)).await).await;
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Dashboard"));
}

#[tokio::test]
async fn dictionary_file_translates_labels() {
    let app = test_app();
    std::fs::write(
        app.translations.path().join("hi.json"),
        r#"{"dashboard": "डैशबोर्ड"}"#,
    )
    .unwrap();
    let cookie = app.login_worker().await;
    app.get("/set_language/hi", Some(&cookie)).await;

    let body = body_text(app.get("/dashboard", Some(&cookie)).await).await;
    assert!(body.contains("डैशबोर्ड"));
    // Keys missing from the file fall back to English
    assert!(body.contains("Reports"));
}

#[tokio::test]
async fn malformed_dictionary_falls_back_to_english() {
    let app = test_app();
    std::fs::write(app.translations.path().join("bn.json"), "{ broken").unwrap();
    let cookie = app.login_worker().await;
    app.get("/set_language/bn", Some(&cookie)).await;

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Dashboard"));
}
