//! Mock generation service for exercising the client over real HTTP.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// A canned response, served in FIFO order.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: format!(r#"{{"error": {{"message": "{}"}}}}"#, message).into_bytes(),
        }
    }

    pub fn video(bytes: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "video/mp4".to_string(),
            body: bytes.to_vec(),
        }
    }

    /// Job accepted, not finished yet.
    pub fn pending(name: &str) -> Self {
        Self::json(&format!(r#"{{"name": "{}"}}"#, name))
    }

    /// Job finished with one sample pointing at `uri`.
    pub fn done_with_video(name: &str, uri: &str) -> Self {
        Self::json(&format!(
            r#"{{"name": "{}", "done": true, "response": {{"generateVideoResponse": {{"generatedSamples": [{{"video": {{"uri": "{}"}}}}]}}}}}}"#,
            name, uri
        ))
    }

    /// Job finished without any sample.
    pub fn done_without_video(name: &str) -> Self {
        Self::json(&format!(
            r#"{{"name": "{}", "done": true, "response": {{"generateVideoResponse": {{"generatedSamples": []}}}}}}"#,
            name
        ))
    }

    /// Job finished with an error payload.
    pub fn done_with_error(name: &str, code: i32, message: &str) -> Self {
        Self::json(&format!(
            r#"{{"name": "{}", "done": true, "error": {{"code": {}, "message": "{}"}}}}"#,
            name, code, message
        ))
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock generation service.
pub struct MockService {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockService {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URI the mock hands out as the generated video location.
    pub fn video_uri(&self) -> String {
        format!("{}/v1beta/files/video-1:download?alt=media", self.base_url())
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = axum::body::to_bytes(req.into_body(), 16 * 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method,
        path,
        query,
        headers,
        body,
    });

    let next = state.responses.lock().await.pop_front();
    let resp = next.unwrap_or_else(|| MockResponse::error(500, "no mock response queued"));

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", resp.content_type)
        .body(Body::from(resp.body))
        .unwrap()
}
