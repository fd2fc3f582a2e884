// tests for the classify-then-generate gate, using fake stages

use async_trait::async_trait;
use guardgate::{BLOCK_MESSAGE, Classifier, Error, Outcome, Pipeline, Responder, Verdict};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// replies with a fixed guardian label, or fails like a dead endpoint
struct FakeGuardian {
    label: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Classifier for FakeGuardian {
    async fn classify(&self, _query: &str) -> Result<Verdict, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.label {
            Some(label) => Ok(Verdict::from_label(label)),
            None => Err(Error::Api {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: "guardian down".into(),
            }),
        }
    }
}

struct FakeGenerator {
    reply: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Responder for FakeGenerator {
    async fn generate(&self, _query: &str) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct Counters {
    guardian: Arc<AtomicUsize>,
    generator: Arc<AtomicUsize>,
}

fn pipeline(
    label: Option<&'static str>,
    reply: &'static str,
) -> (Pipeline<FakeGuardian, FakeGenerator>, Counters) {
    let counters = Counters {
        guardian: Arc::new(AtomicUsize::new(0)),
        generator: Arc::new(AtomicUsize::new(0)),
    };
    let pipeline = Pipeline::new(
        FakeGuardian {
            label,
            calls: counters.guardian.clone(),
        },
        FakeGenerator {
            reply,
            calls: counters.generator.clone(),
        },
    );
    (pipeline, counters)
}

#[tokio::test]
async fn test_risky_query_is_blocked() {
    let (pipeline, counters) = pipeline(Some("Yes"), "should never appear");

    let response = pipeline.process("How can I hurt someone?").await.unwrap();

    assert_eq!(response, BLOCK_MESSAGE);
    assert_eq!(counters.guardian.load(Ordering::SeqCst), 1);
    assert_eq!(counters.generator.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_shouty_yes_is_blocked() {
    let (pipeline, counters) = pipeline(Some("  YES\n"), "nope");

    let outcome = pipeline.run("I want to kill all the humans.").await.unwrap();

    assert_eq!(outcome, Outcome::Blocked);
    assert_eq!(counters.generator.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_safe_query_is_forwarded() {
    let (pipeline, counters) = pipeline(Some("No"), "Rome.");

    let response = pipeline
        .process("What is the capital of Italy?")
        .await
        .unwrap();

    assert_eq!(response, "Rome.");
    assert_eq!(counters.generator.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_any_other_label_is_forwarded() {
    for label in ["no", "NO ", "maybe", ""] {
        let (pipeline, counters) = pipeline(Some(label), "Mount Everest.");

        let outcome = pipeline.run("What is the biggest mountain?").await.unwrap();

        assert_eq!(outcome, Outcome::Generated("Mount Everest.".into()));
        assert_eq!(counters.generator.load(Ordering::SeqCst), 1, "label {label:?}");
    }
}

#[tokio::test]
async fn test_generator_output_returned_unmodified() {
    let (pipeline, _) = pipeline(Some("No"), "  spaced out  ");

    // the stage owns trimming; the gate passes text through as-is
    let response = pipeline.process("hi").await.unwrap();
    assert_eq!(response, "  spaced out  ");
}

#[tokio::test]
async fn test_guardian_error_propagates() {
    let (pipeline, counters) = pipeline(None, "unused");

    let err = pipeline.process("What is the capital of Italy?").await.unwrap_err();

    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(counters.guardian.load(Ordering::SeqCst), 1);
    assert_eq!(counters.generator.load(Ordering::SeqCst), 0);
}

#[test]
fn test_outcome_text() {
    assert_eq!(Outcome::Blocked.text(), BLOCK_MESSAGE);
    assert!(Outcome::Blocked.is_blocked());
    let generated = Outcome::Generated("Rome.".into());
    assert!(!generated.is_blocked());
    assert_eq!(generated.to_string(), "Rome.");
}
