use ielts_core::tasks::WritingTask;

use super::test_harness::{TestApp, ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_exam_modes() {
    let mut harness = setup_view_harness(ViewKind::Home, TestApp::default());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "IELTS Practice Exam",
        "Reading Test",
        "60 minutes",
        "Writing Task 1",
        "20 minutes",
        "Writing Task 2",
        "40 minutes",
        "Start Practice",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn reading_view_smoke_renders_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Reading, TestApp::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("not available yet"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_renders_fresh_session() {
    let mut harness = setup_view_harness(
        ViewKind::Writing(WritingTask::Two),
        TestApp::with_min_words(3),
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Writing Task 2"), "missing title in {html}");
    assert!(html.contains("Not Started"), "missing status in {html}");
    assert!(html.contains("40:00"), "missing timer in {html}");
    assert!(html.contains("0 words"), "missing word count in {html}");
    assert!(html.contains("New Task"), "missing new task in {html}");
    assert!(!html.contains("Describe the chart."), "prompt shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_shows_revealed_prompt_and_evaluation() {
    let mut harness = setup_view_harness(
        ViewKind::Writing(WritingTask::One),
        TestApp::with_min_words(3),
    );
    harness.rebuild();
    harness.drive_async().await;

    let session = harness.app.last_session();
    session.start_task().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("In Progress"), "missing status in {html}");
    assert!(html.contains("Describe the chart."), "missing prompt in {html}");

    session.update_draft("three whole words");
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("3 words"), "missing word count in {html}");

    session.submit_draft().await.unwrap();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("three whole words"), "missing submission in {html}");
    assert!(html.contains("Band 7.0 overall."), "missing evaluation in {html}");
    assert!(html.contains("0 words"), "draft not cleared in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_ignores_rejected_submission() {
    let mut harness = setup_view_harness(
        ViewKind::Writing(WritingTask::One),
        TestApp::with_min_words(3),
    );
    harness.rebuild();
    harness.drive_async().await;

    let session = harness.app.last_session();
    session.start_task().await;
    session.update_draft("only two");
    assert!(session.submit_draft().await.is_err());
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("2 words"), "draft lost in {html}");
    assert!(!html.contains("Band 7.0 overall."), "evaluation shown in {html}");
    assert_eq!(session.snapshot().messages().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_toggles_timer_controls() {
    let mut harness = setup_view_harness(
        ViewKind::Writing(WritingTask::One),
        TestApp::with_min_words(3),
    );
    harness.rebuild();
    harness.drive_async().await;

    let session = harness.app.last_session();
    assert!(session.start_timer().is_some());
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("20:00"), "missing timer in {html}");
    assert!(html.contains("Pause"), "missing pause in {html}");

    session.pause_timer();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(!html.contains("Pause"), "still running in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_renders_error_for_invalid_task() {
    let mut harness = setup_view_harness(
        ViewKind::Writing(WritingTask::One),
        TestApp::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("could not be loaded"), "missing error in {html}");
}
