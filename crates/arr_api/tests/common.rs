use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the fake Arr instance saw of one request.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct FakeArrState {
    status: u16,
    body: String,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

/// An in-process stand-in for Radarr/Sonarr that answers every request with the same canned
/// response and records what it received.
pub struct FakeArr {
    pub base_url: String,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl FakeArr {
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(RwLock::new(Vec::<RecordedRequest>::new()));
        let state = web::Data::new(FakeArrState {
            status,
            body: String::from(body),
            requests: requests.clone(),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(record_and_respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let address = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        FakeArr {
            base_url: format!("http://{}", address),
            requests,
            handle,
        }
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn record_and_respond(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<FakeArrState>,
) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let recorded = RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        api_key: header("X-Api-Key"),
        content_type: header("Content-Type"),
        body: String::from_utf8_lossy(&body).to_string(),
    };
    state.requests.write().await.push(recorded);

    HttpResponse::build(StatusCode::from_u16(state.status).unwrap())
        .content_type("application/json")
        .body(state.body.clone())
}
