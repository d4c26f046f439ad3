use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use moodflag_domain::answers::{
    CareOptions, Country, DaysIndoors, Gender, Occupation, YesNo, YesNoMaybe,
};
use moodflag_domain::config::ClientConfig;
use moodflag_domain::record::SubmissionRecord;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// What the mock service answers to every request.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Stall(Duration),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

/// An in-process prediction service bound to an ephemeral port.
pub struct MockService {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl MockService {
    pub async fn spawn(reply: Reply) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { reply, hits: hits.clone(), bodies: bodies.clone() };

        let app = Router::new().route("/predict", post(predict)).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{addr}"), hits, bodies }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().await.clone()
    }
}

async fn predict(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.bodies.lock().await.push(body);

    match state.reply {
        Reply::Json(status, value) => (status, Json(value)).into_response(),
        Reply::Text(status, text) => (status, text).into_response(),
        Reply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            StatusCode::OK.into_response()
        },
    }
}

/// A base URL nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config_for(base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.prediction.base_url = base_url.to_owned();
    config.prediction.result_delay_ms = 0;
    config
}

pub fn sample_record() -> SubmissionRecord {
    SubmissionRecord::builder()
        .gender(Gender::Female)
        .country(Country::UnitedStates)
        .occupation(Occupation::Corporate)
        .self_employed(YesNo::No)
        .family_history(YesNo::Yes)
        .treatment(YesNo::Yes)
        .days_indoors(DaysIndoors::HalfToOneMonth)
        .growing_stress(YesNoMaybe::Yes)
        .changes_habits(YesNoMaybe::Maybe)
        .mental_health_history(YesNoMaybe::No)
        .coping_struggles(YesNo::Yes)
        .work_interest(YesNoMaybe::No)
        .social_weakness(YesNoMaybe::Maybe)
        .mental_health_interview(YesNoMaybe::No)
        .care_options(CareOptions::NotSure)
        .build()
}
