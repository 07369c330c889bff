#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use safe_webtrust::{
    build_app,
    db::MemoryFeedbackStore,
    errors::AppError,
    external::{TextGenerator, ThreatIntel},
    models::ThreatLookup,
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

#[derive(Clone)]
pub enum Threats {
    Clean,
    Flagged(Vec<&'static str>),
    Down,
}

#[derive(Clone)]
pub struct FakeThreatIntel {
    threats: Threats,
    pub calls: Arc<AtomicUsize>,
}

impl FakeThreatIntel {
    pub fn new(threats: Threats) -> Self {
        Self {
            threats,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ThreatIntel for FakeThreatIntel {
    async fn lookup(&self, url: &str) -> Result<ThreatLookup, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.threats {
            Threats::Clean => ThreatLookup::from_response(json!({})),
            Threats::Flagged(kinds) => {
                let matches = kinds
                    .iter()
                    .map(|kind| {
                        json!({
                            "threatType": kind,
                            "platformType": "ANY_PLATFORM",
                            "threatEntryType": "URL",
                            "threat": { "url": url }
                        })
                    })
                    .collect::<Vec<_>>();
                ThreatLookup::from_response(json!({ "matches": matches }))
            }
            Threats::Down => Err(AppError::ThreatIntel(
                "Safe Browsing returned 403 Forbidden: API key not valid".into(),
            )),
        }
    }
}

#[derive(Clone)]
pub struct FakeTextGenerator {
    reply: Result<String, String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeTextGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            reply: Err(cause.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(AppError::Ai)
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryFeedbackStore,
    pub threat_intel: FakeThreatIntel,
    pub ai: FakeTextGenerator,
}

impl TestApp {
    pub fn new(threats: Threats, ai: FakeTextGenerator) -> Self {
        let store = MemoryFeedbackStore::new();
        let threat_intel = FakeThreatIntel::new(threats);
        let state = AppState::new(store.clone(), threat_intel.clone(), ai.clone());
        let router = build_app(state, None).expect("build router");

        Self {
            router,
            store,
            threat_intel,
            ai,
        }
    }

    pub fn healthy() -> Self {
        Self::new(Threats::Clean, FakeTextGenerator::replying("Looks legitimate."))
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let req = Request::get(path).body(Body::empty()).unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn trust_score(&self, url: &str) -> Value {
        let (status, body) = self
            .get(&format!("/trust-score?url={}", encode(url)))
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body
    }
}

/// Serves `state` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_app(state, None).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '.' | '_' | '~' => out.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}
