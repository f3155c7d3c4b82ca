mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use kariyer_frontend::i18n::Text;
use kariyer_frontend::interview::{InterviewInputError, InterviewState, StepKind};

#[derive(Default)]
struct Recorder {
    question_calls: AtomicUsize,
    evaluate_calls: AtomicUsize,
    last_question_body: Mutex<Option<Value>>,
    last_evaluate_body: Mutex<Option<Value>>,
}

fn interview_router(recorder: Arc<Recorder>, evaluation: Value) -> Router {
    Router::new()
        .route(
            "/interview_simulation",
            post(
                |State(rec): State<Arc<Recorder>>, Json(body): Json<Value>| async move {
                    rec.question_calls.fetch_add(1, Ordering::SeqCst);
                    *rec.last_question_body.lock().unwrap() = Some(body);
                    Json(json!({ "question": "Tell me about yourself" }))
                },
            ),
        )
        .route(
            "/interview_simulation/evaluate",
            post(
                move |State(rec): State<Arc<Recorder>>, Json(body): Json<Value>| async move {
                    rec.evaluate_calls.fetch_add(1, Ordering::SeqCst);
                    *rec.last_evaluate_body.lock().unwrap() = Some(body);
                    Json(evaluation)
                },
            ),
        )
        .with_state(recorder)
}

#[test]
fn full_session_walks_every_step() {
    let recorder = Arc::new(Recorder::default());
    let router = interview_router(
        recorder.clone(),
        json!({ "feedback": "Net ve yapılandırılmış bir cevap.", "score": 82 }),
    );
    let api = common::client(&common::spawn_server(router));
    let mut state = InterviewState::default();

    assert!(state.begin_fetch_question());
    state.finish_fetch_question(api.fetch_question());
    assert_eq!(state.kind(), StepKind::Interview);
    assert_eq!(state.question(), Some("Tell me about yourself"));
    assert_eq!(
        recorder.last_question_body.lock().unwrap().clone(),
        Some(json!({}))
    );

    *state.answer_mut().unwrap() = "Beş yıldır backend geliştiriyorum.".into();
    let input = state.begin_submit_answer().unwrap().expect("request should be issued");
    state.finish_submit_answer(api.evaluate_answer(&input));

    assert_eq!(state.kind(), StepKind::Result);
    let evaluation = state.evaluation().unwrap();
    assert_eq!(evaluation.feedback, "Net ve yapılandırılmış bir cevap.");
    assert_eq!(evaluation.score, Some(82));
    assert_eq!(
        recorder.last_evaluate_body.lock().unwrap().clone(),
        Some(json!({
            "question": "Tell me about yourself",
            "answer": "Beş yıldır backend geliştiriyorum."
        }))
    );

    state.reset();
    assert_eq!(state.kind(), StepKind::Start);
    assert_eq!(state.question(), None);
}

#[test]
fn missing_score_is_not_invented() {
    let recorder = Arc::new(Recorder::default());
    let router = interview_router(recorder, json!({ "feedback": "Daha fazla örnek verin." }));
    let api = common::client(&common::spawn_server(router));
    let mut state = InterviewState::default();

    state.begin_fetch_question();
    state.finish_fetch_question(api.fetch_question());
    *state.answer_mut().unwrap() = "Cevap".into();
    let input = state.begin_submit_answer().unwrap().unwrap();
    state.finish_submit_answer(api.evaluate_answer(&input));

    assert_eq!(state.evaluation().unwrap().score, None);
}

#[test]
fn blank_answer_never_reaches_the_server() {
    let recorder = Arc::new(Recorder::default());
    let router = interview_router(recorder.clone(), json!({ "feedback": "x" }));
    let api = common::client(&common::spawn_server(router));
    let mut state = InterviewState::default();

    state.begin_fetch_question();
    state.finish_fetch_question(api.fetch_question());
    *state.answer_mut().unwrap() = "    ".into();

    assert_eq!(state.begin_submit_answer(), Err(InterviewInputError::EmptyAnswer));
    assert_eq!(state.kind(), StepKind::Interview);
    assert_eq!(recorder.evaluate_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_question_fetch_stays_in_start() {
    let router = Router::new().route(
        "/interview_simulation",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Soru servisi kullanılamıyor" })),
            )
                .into_response()
        }),
    );
    let api = common::client(&common::spawn_server(router));
    let mut state = InterviewState::default();

    state.begin_fetch_question();
    state.finish_fetch_question(api.fetch_question());

    assert_eq!(state.kind(), StepKind::Start);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Soru servisi kullanılamıyor"));
}

#[test]
fn failed_evaluation_stays_in_interview() {
    let router = Router::new()
        .route(
            "/interview_simulation",
            post(|| async { Json(json!({ "question": "Neden biz?" })) }),
        )
        .route(
            "/interview_simulation/evaluate",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let api = common::client(&common::spawn_server(router));
    let mut state = InterviewState::default();

    state.begin_fetch_question();
    state.finish_fetch_question(api.fetch_question());
    *state.answer_mut().unwrap() = "Çünkü...".into();
    let input = state.begin_submit_answer().unwrap().unwrap();
    state.finish_submit_answer(api.evaluate_answer(&input));

    assert_eq!(state.kind(), StepKind::Interview);
    assert_eq!(state.question(), Some("Neden biz?"));
    assert_eq!(state.answer_mut().map(|a| a.clone()), Some("Çünkü...".to_string()));
    assert!(state.error().is_some());
}

#[test]
fn unreachable_server_keeps_start_with_connection_message() {
    let api = common::client(&common::closed_port_url());
    let mut state = InterviewState::default();

    assert!(state.begin_fetch_question());
    state.finish_fetch_question(api.fetch_question());

    assert_eq!(state.kind(), StepKind::Start);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(Text::ConnectionError.tr()));
}
