//! Integration tests for ContactForge submission
//!
//! Time is paused in these tests, so the simulated network delay elapses
//! instantly while still being measured on tokio's virtual clock.

use contactforge::{
    build_submission_payload,
    config::SubmissionConfig,
    form::NoticeKind,
    test_utils::MockTransport,
    ContactForm, Field, SimulatedTransport, SubmissionError, SubmissionTransport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::time::Instant;

fn fill(form: &mut ContactForm) {
    form.set_value(Field::Name, "Ann");
    form.set_value(Field::Email, "a@b.co");
    form.set_value(Field::Subject, "Hi!");
    form.set_value(Field::Message, "1234567890");
}

#[tokio::test(start_paused = true)]
async fn test_simulated_submission_waits_configured_delay() {
    let config = SubmissionConfig {
        delay_ms: 250,
        failure_rate: 0.0,
        notice_duration_ms: 5000,
    };
    let transport = SimulatedTransport::from_config(&config);
    let payload = build_submission_payload("Ann", "a@b.co", "Hi!", "1234567890");

    let start = Instant::now();
    let receipt = transport.submit(payload.clone()).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(receipt.data, payload);
    assert_eq!(receipt.message, "Message sent successfully");
}

#[tokio::test(start_paused = true)]
async fn test_certain_failure_rate_always_fails() {
    let transport = SimulatedTransport::new(Duration::from_millis(1500), 1.0);
    let payload = build_submission_payload("Ann", "a@b.co", "Hi!", "1234567890");

    for _ in 0..20 {
        assert_eq!(
            transport.submit(payload.clone()).await,
            Err(SubmissionError::Network)
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_seeded_failure_rate_is_about_five_percent() {
    let transport = SimulatedTransport::with_rng(
        Duration::from_millis(1500),
        0.05,
        StdRng::seed_from_u64(2024),
    );
    let payload = build_submission_payload("Ann", "a@b.co", "Hi!", "1234567890");

    let runs = 5_000;
    let mut failures = 0u32;
    for _ in 0..runs {
        if transport.submit(payload.clone()).await.is_err() {
            failures += 1;
        }
    }

    let rate = f64::from(failures) / f64::from(runs);
    assert!((0.035..0.065).contains(&rate), "failure rate was {}", rate);
}

#[tokio::test(start_paused = true)]
async fn test_form_session_through_simulated_transport() {
    let transport = SimulatedTransport::new(Duration::from_millis(1500), 0.0);
    let mut form = ContactForm::new();
    fill(&mut form);

    let start = Instant::now();
    let receipt = form.submit(&transport).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_eq!(receipt.data.subject, "Hi!");
    assert!(!form.is_busy());
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.visible_notice(), Some(NoticeKind::Success));

    tokio::time::advance(Duration::from_millis(5000)).await;
    assert_eq!(form.visible_notice(), None);
}

#[tokio::test(start_paused = true)]
async fn test_form_session_failure_then_retry() {
    let transport = MockTransport::new();
    transport.fail_next_submission();

    let mut form = ContactForm::new();
    fill(&mut form);

    assert_eq!(form.submit(&transport).await, Err(SubmissionError::Network));
    assert_eq!(form.visible_notice(), Some(NoticeKind::Error));
    assert_eq!(form.value(Field::Email), "a@b.co");

    // Manual retry with the values still in place
    assert!(form.submit(&transport).await.is_ok());
    assert_eq!(form.visible_notice(), Some(NoticeKind::Success));
    assert_eq!(transport.submitted().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_session_works_with_boxed_transport() {
    let transport: Box<dyn SubmissionTransport> = Box::new(MockTransport::new());
    let mut form = ContactForm::new();
    fill(&mut form);

    assert!(form.submit(transport.as_ref()).await.is_ok());
}
