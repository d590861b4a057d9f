//! Scripted `/story_data` server on an ephemeral port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use tokio::net::TcpListener;

/// What the scripted server answers with.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// 200 with the given JSON body.
    Json(serde_json::Value),
    /// An empty response with the given status code.
    Status(u16),
    /// 200 with a raw body claiming to be JSON (for decode-failure tests).
    RawBody(String),
}

type SharedResponse = Arc<Mutex<ScriptedResponse>>;

/// A real HTTP server serving `GET /story_data` from a swappable scripted
/// response.
pub struct StoryDataServer {
    addr: SocketAddr,
    response: SharedResponse,
}

impl StoryDataServer {
    /// Binds an ephemeral local port and serves `initial` until changed.
    ///
    /// # Panics
    /// Panics if the listener cannot bind; test-only code.
    pub async fn spawn(initial: ScriptedResponse) -> Self {
        let response: SharedResponse = Arc::new(Mutex::new(initial));

        let app = Router::new()
            .route("/story_data", get(story_data))
            .with_state(Arc::clone(&response));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, response }
    }

    /// Base URL for pointing a client at this server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Swaps the response served from now on.
    ///
    /// # Panics
    /// Panics if the response lock is poisoned; test-only code.
    pub fn set_response(&self, response: ScriptedResponse) {
        *self.response.lock().unwrap() = response;
    }
}

async fn story_data(State(response): State<SharedResponse>) -> Response {
    let scripted = response.lock().unwrap().clone();
    match scripted {
        ScriptedResponse::Json(value) => Json(value).into_response(),
        ScriptedResponse::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        ScriptedResponse::RawBody(body) => (
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
    }
}
