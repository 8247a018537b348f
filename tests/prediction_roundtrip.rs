//! End-to-end runs of both forms against local stub prediction services.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use solar_dash::features::{CLASSIFICATION_FEATURES, REGRESSION_FEATURES};
use solar_dash::prelude::*;

type Seen = Arc<Mutex<Vec<Value>>>;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode),
    Text(&'static str),
}

/// Serves `POST /predict` on an ephemeral port, recording every JSON body.
async fn spawn_stub(reply: Reply, delay: Duration) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route(
        "/predict",
        post({
            let seen = Arc::clone(&seen);
            move |Json(body): Json<Value>| {
                let seen = Arc::clone(&seen);
                let reply = reply.clone();
                async move {
                    seen.lock().unwrap().push(body);
                    tokio::time::sleep(delay).await;
                    match reply {
                        Reply::Json(v) => Json(v).into_response(),
                        Reply::Status(code) => (code, Json(json!({ "error": "boom" }))).into_response(),
                        Reply::Text(t) => t.into_response(),
                    }
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/predict"), seen)
}

async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/predict")
}

fn form_for(kind: FormKind, endpoint: &str) -> PredictionForm {
    let config = DashboardConfig {
        regression_endpoint: endpoint.to_string(),
        classification_endpoint: endpoint.to_string(),
    };
    PredictionForm::new(FormSpec::new(kind, &config))
}

fn fill(form: &mut PredictionForm, values: &[&str]) {
    let names: Vec<&'static str> = form.spec().features.names().to_vec();
    assert_eq!(names.len(), values.len());
    for (name, v) in names.iter().zip(values) {
        form.edit(name, *v).unwrap();
    }
}

const REGRESSION_VALUES: &[&str] = &[
    "1", "2", "3", "4", "25", "10", "20", "0", "0", "0", "0", "0.5", "0.8", "0.2", "3.22", "0.17",
    "0.98", "0.34", "0.94", "0.7",
];

#[tokio::test]
async fn happy_regression_renders_three_decimals() {
    let (url, seen) = spawn_stub(
        Reply::Json(json!({ "Predicted_PVOUT": 4.56789 })),
        Duration::ZERO,
    )
    .await;
    let mut form = form_for(FormKind::Regression, &url);
    fill(&mut form, REGRESSION_VALUES);

    let outcome = form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated("4.568".to_string()));
    assert_eq!(form.result(), Some("4.568"));
    assert_eq!(form.state(), SubmissionState::Succeeded);

    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = bodies[0].as_object().unwrap();
    assert_eq!(body.len(), 20);
    for (name, text) in REGRESSION_FEATURES.iter().zip(REGRESSION_VALUES) {
        let expected: f64 = text.parse().unwrap();
        assert_eq!(body[*name].as_f64(), Some(expected), "{name}");
    }
}

#[tokio::test]
async fn classification_accepts_alternate_key() {
    let (url, seen) = spawn_stub(
        Reply::Json(json!({ "Predicted_Site_Suitability": "High" })),
        Duration::ZERO,
    )
    .await;
    let mut form = form_for(FormKind::Classification, &url);
    fill(&mut form, &["1"; 22]);

    form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(form.result(), Some("High"));

    let bodies = seen.lock().unwrap();
    let body = bodies[0].as_object().unwrap();
    let mut keys: Vec<&str> = body.keys().map(String::as_str).collect();
    let mut declared = CLASSIFICATION_FEATURES.to_vec();
    keys.sort_unstable();
    declared.sort_unstable();
    assert_eq!(keys, declared);
    assert!(body.values().all(|v| v.as_f64() == Some(1.0)));
}

#[tokio::test]
async fn transport_failure_notifies_and_keeps_slot() {
    let url = unreachable_endpoint().await;
    let mut form = form_for(FormKind::Regression, &url);
    fill(&mut form, REGRESSION_VALUES);

    let outcome = form.submit(&PredictionClient::new()).await.unwrap();
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(PredictionError::Transport { .. })
    ));
    assert_eq!(
        form.notice_for(&outcome),
        Some("Prediction error: check backend is running and that inputs are valid.")
    );
    assert_eq!(form.result(), None);
    assert!(!form.submit_disabled());
    assert_eq!(form.submit_label(), "Predict PVOUT");
}

#[tokio::test]
async fn service_failure_keeps_previous_result() {
    let (ok_url, _) = spawn_stub(
        Reply::Json(json!({ "Predicted_Class": "Medium" })),
        Duration::ZERO,
    )
    .await;
    let (bad_url, _) = spawn_stub(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR), Duration::ZERO).await;
    let client = PredictionClient::new();

    let mut form = form_for(FormKind::Classification, &ok_url);
    form.submit(&client).await.unwrap();
    assert_eq!(form.result(), Some("Medium"));

    let req = form.begin_submit().unwrap();
    let response = client.predict(&bad_url, &req.payload).await;
    assert_eq!(
        response,
        Err(PredictionError::Status {
            endpoint: bad_url.clone(),
            status: 500
        })
    );
    let outcome = form.finish(response);
    assert!(form.notice_for(&outcome).is_some());
    assert_eq!(form.result(), Some("Medium"));
    assert_eq!(form.state(), SubmissionState::Failed);
}

#[tokio::test]
async fn shape_mismatch_leaves_form_idle_without_notice() {
    let (url, _) = spawn_stub(Reply::Json(json!({ "foo": 1 })), Duration::ZERO).await;
    let mut form = form_for(FormKind::Classification, &url);
    fill(&mut form, &["1"; 22]);

    let outcome = form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::NoPrediction);
    assert_eq!(form.notice_for(&outcome), None);
    assert_eq!(form.result(), None);
    assert!(!form.submit_disabled());
}

#[tokio::test]
async fn non_json_success_body_counts_as_mismatch() {
    let (url, _) = spawn_stub(Reply::Text("ok"), Duration::ZERO).await;
    let mut form = form_for(FormKind::Regression, &url);
    let outcome = form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::NoPrediction);
}

#[tokio::test]
async fn empty_fields_reach_the_wire_as_null() {
    let (url, seen) = spawn_stub(
        Reply::Json(json!({ "Predicted_PVOUT": "7" })),
        Duration::ZERO,
    )
    .await;
    let mut form = form_for(FormKind::Regression, &url);
    form.edit("GHI", "5.5").unwrap();

    form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(form.result(), Some("7.000"));

    let bodies = seen.lock().unwrap();
    let body = bodies[0].as_object().unwrap();
    assert_eq!(body.len(), 20);
    assert_eq!(body["GHI"], json!(5.5));
    assert_eq!(body.values().filter(|v| v.is_null()).count(), 19);
}

#[tokio::test]
async fn forms_complete_independently() {
    let (reg_url, _) = spawn_stub(
        Reply::Json(json!({ "Predicted_PVOUT": 1.5 })),
        Duration::from_millis(200),
    )
    .await;
    let (cls_url, _) = spawn_stub(
        Reply::Json(json!({ "Predicted_Class": "Low" })),
        Duration::from_millis(50),
    )
    .await;
    let client = PredictionClient::new();
    let order: Arc<Mutex<Vec<FormKind>>> = Arc::new(Mutex::new(Vec::new()));

    let run = |mut form: PredictionForm| {
        let client = client.clone();
        let order = Arc::clone(&order);
        async move {
            form.submit(&client).await.unwrap();
            order.lock().unwrap().push(form.kind());
            form
        }
    };

    let reg = form_for(FormKind::Regression, &reg_url);
    let cls = form_for(FormKind::Classification, &cls_url);
    let (reg, cls) = tokio::join!(run(reg), run(cls));

    assert_eq!(
        *order.lock().unwrap(),
        vec![FormKind::Classification, FormKind::Regression]
    );
    assert_eq!(reg.result(), Some("1.500"));
    assert_eq!(cls.result(), Some("Low"));
    assert_eq!(reg.state(), SubmissionState::Succeeded);
    assert_eq!(cls.state(), SubmissionState::Succeeded);
}

#[tokio::test]
async fn class_key_priority_is_enforced() {
    let (url, _) = spawn_stub(
        Reply::Json(json!({ "Predicted_Class": "A", "prediction": "B" })),
        Duration::ZERO,
    )
    .await;
    let mut form = form_for(FormKind::Classification, &url);
    form.submit(&PredictionClient::new()).await.unwrap();
    assert_eq!(form.result(), Some("A"));
}
