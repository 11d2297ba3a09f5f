//! In-process portal backend built on actix-web.
//!
//! Serves canned replies for `/api/student` and `/health`, a few fixed photo
//! routes, and records every lookup request it receives.

use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::{ACCEPT, CONTENT_TYPE};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use reqwest::Url;
use serde_json::Value;

/// Minimal JPEG header; enough for a non-empty image body.
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

/// Reply served for one endpoint.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_owned(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_owned(),
        }
    }
}

/// One request observed on `/api/student`.
#[derive(Debug, Clone)]
pub struct ReceivedLookup {
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

struct StubState {
    student: CannedResponse,
    health: CannedResponse,
    received: Arc<Mutex<Vec<ReceivedLookup>>>,
}

/// Running stub backend. Stopped on drop.
pub struct StubPortal {
    pub base_url: Url,
    received: Arc<Mutex<Vec<ReceivedLookup>>>,
    handle: ServerHandle,
}

impl StubPortal {
    pub fn received(&self) -> Vec<ReceivedLookup> {
        self.received.lock().expect("received mutex").clone()
    }
}

impl Drop for StubPortal {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}

fn header(req: &HttpRequest, name: actix_web::http::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn reply(canned: &CannedResponse) -> HttpResponse {
    HttpResponse::build(StatusCode::from_u16(canned.status).expect("valid status"))
        .content_type(canned.content_type)
        .body(canned.body.clone())
}

async fn student(state: web::Data<StubState>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let parsed = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .expect("received mutex")
        .push(ReceivedLookup {
            content_type: header(&req, CONTENT_TYPE),
            accept: header(&req, ACCEPT),
            body: parsed,
        });
    reply(&state.student)
}

async fn health(state: web::Data<StubState>) -> HttpResponse {
    reply(&state.health)
}

async fn photo_ok() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/jpeg")
        .body(JPEG_BYTES)
}

async fn photo_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body("<html>not a photo</html>")
}

async fn photo_empty() -> HttpResponse {
    HttpResponse::Ok().content_type("image/png").finish()
}

/// Start a stub backend on an ephemeral port.
pub fn start(student_reply: CannedResponse, health_reply: CannedResponse) -> StubPortal {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(StubState {
        student: student_reply,
        health: health_reply,
        received: Arc::clone(&received),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/api/student", web::post().to(student))
            .route("/health", web::get().to(health))
            .route("/photos/ok.jpg", web::get().to(photo_ok))
            .route("/photos/page.jpg", web::get().to(photo_html))
            .route("/photos/empty.png", web::get().to(photo_empty))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub portal");
    let addr = *server.addrs().first().expect("bound address");
    let running = server.run();
    let handle = running.handle();
    actix_rt::spawn(running);

    StubPortal {
        base_url: Url::parse(&format!("http://{addr}")).expect("stub base URL"),
        received,
        handle,
    }
}
