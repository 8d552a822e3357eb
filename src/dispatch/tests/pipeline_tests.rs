use std::sync::{Arc, Mutex};

use super::{event, recording_guard, seq};
use crate::core::KeyChord;
use crate::dispatch::{adapt_handler, handler_fn, sync_handler, Handler, HandlerPipeline, KeyHistory};

/// Stage that records when it runs around the inner handler
fn tracing_stage(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> impl Fn(Handler) -> Handler + Send + Sync {
    move |inner: Handler| -> Handler {
        let log = log.clone();
        handler_fn(move |event| {
            let log = log.clone();
            let inner = inner.clone();
            async move {
                log.lock().unwrap().push(format!("{name} before"));
                let outcome = inner(event).await;
                log.lock().unwrap().push(format!("{name} after"));
                outcome
            }
        })
    }
}

#[tokio::test]
async fn test_stages_apply_first_innermost() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = HandlerPipeline::new()
        .stage(tracing_stage("inner", log.clone()))
        .stage(tracing_stage("outer", log.clone()));
    assert_eq!(pipeline.len(), 2);

    let handler = pipeline.apply(sync_handler(|_| Ok(())));
    handler(event("x")).await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["outer before", "inner before", "inner after", "outer after"]
    );
}

#[test]
fn test_pipeline_shape_depends_on_sequence() {
    let (guard, _) = recording_guard();
    let history = KeyHistory::default();

    assert_eq!(HandlerPipeline::for_sequence(&seq("g"), &guard, &history).len(), 1);
    assert_eq!(HandlerPipeline::for_sequence(&seq("g g"), &guard, &history).len(), 2);
    assert!(HandlerPipeline::new().is_empty());
}

#[tokio::test]
async fn test_single_chord_does_not_reset_history() {
    let (guard, _) = recording_guard();
    let history = KeyHistory::new(2);
    history.push(&"a".parse::<KeyChord>().unwrap());

    let handler = adapt_handler(&seq("g"), sync_handler(|_| Ok(())), &guard, &history);
    handler(event("g")).await.unwrap();

    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_reset_happens_before_guard_releases() {
    let (guard, _) = recording_guard();
    let history = KeyHistory::new(2);
    history.push(&"g".parse::<KeyChord>().unwrap());

    let handler = adapt_handler(&seq("g g"), sync_handler(|_| Ok(())), &guard, &history);
    let pending = handler(event("g"));
    assert_eq!(guard.active_count(), 1);

    pending.await.unwrap();
    assert!(history.is_empty());
    assert_eq!(guard.active_count(), 0);
}

#[tokio::test]
async fn test_failing_multi_chord_handler_is_suppressed_and_resets() {
    let (guard, reporter) = recording_guard();
    let history = KeyHistory::new(2);
    history.push(&"g".parse::<KeyChord>().unwrap());

    let handler = adapt_handler(
        &seq("g g"),
        sync_handler(|_| Err(anyhow::anyhow!("nope"))),
        &guard,
        &history,
    );

    assert!(handler(event("g")).await.is_ok());
    assert!(history.is_empty());
    assert_eq!(reporter.reports().len(), 1);
    assert_eq!(reporter.reports()[0].1.sequence, "g g");
}
