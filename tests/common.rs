#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use shoplist::db::Store;
use shoplist::web::{AppState, router};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn shoplist() -> Command {
    cargo_bin_cmd!("shoplist")
}

/// What the tests care about from a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn redirects_to(&self, path: &str) -> bool {
        self.status == StatusCode::SEE_OTHER && self.location.as_deref() == Some(path)
    }
}

/// Drives the router in-process and keeps the session cookie between
/// requests, like a browser would.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new() -> (Self, Store) {
        let store = Store::open_in_memory().expect("open in-memory store");
        (Self::with_store(store.clone()), store)
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            app: router(AppState::new(store, TEST_SECRET)),
            cookie: None,
        }
    }

    pub fn set_raw_cookie(&mut self, cookie: &str) {
        self.cookie = Some(cookie.to_string());
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let req = self.request("GET", path).body(Body::empty()).unwrap();
        self.send(req).await
    }

    pub async fn post(&mut self, path: &str, form: &str) -> TestResponse {
        let req = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(req).await
    }

    /// Log in and land on the list page (which also consumes the
    /// "Logged in as" flash).
    pub async fn login(&mut self, name: &str) {
        let resp = self.post("/login", &format!("name={name}")).await;
        assert!(resp.redirects_to("/list"), "login failed: {resp:?}");
        let page = self.get("/list").await;
        assert_eq!(page.status, StatusCode::OK);
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&mut self, req: Request<Body>) -> TestResponse {
        let resp = self.app.clone().oneshot(req).await.unwrap();

        for value in resp.headers().get_all(header::SET_COOKIE) {
            let raw = value.to_str().unwrap();
            let pair = raw.split(';').next().unwrap_or_default().trim();
            let removed = pair.ends_with('=') || raw.contains("Max-Age=0");
            self.cookie = if removed { None } else { Some(pair.to_string()) };
        }

        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }
}
