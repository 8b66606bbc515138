#![allow(dead_code)]

use std::path::PathBuf;

use asha_ehr::{
    config::{AppConfig, Config, Environment, ServerConfig},
    create_router,
    db::Store,
    AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub translations: TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with_store(Store::with_demo_data())
}

pub fn test_app_with_store(store: Store) -> TestApp {
    let translations = tempfile::tempdir().expect("create translations dir");
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        app: AppConfig {
            name: "ASHA EHR".to_string(),
            environment: Environment::Development,
            static_dir: PathBuf::from("static"),
            translations_dir: translations.path().to_path_buf(),
        },
    };
    let router = create_router(AppState::new(config, store));
    TestApp {
        router,
        translations,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Log in and return the session cookie pair
    pub async fn login(&self, user_id: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/login",
                &format!("user_id={user_id}&password={password}"),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response).expect("login sets a session cookie")
    }

    pub async fn login_worker(&self) -> String {
        self.login("demo", "demo123").await
    }

    pub async fn login_supervisor(&self) -> String {
        self.login("phc_1", "phc123").await
    }
}

pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}
