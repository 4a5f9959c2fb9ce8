use quiz_core::model::{
    Challenge, ChallengeId, Language, LanguageId, Level, Question, QuestionId,
};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_failing};

fn build_challenge(id: u64, title: &str) -> Challenge {
    let questions = vec![
        Question::new(
            QuestionId::new(id * 100),
            "What does `let` do?",
            vec!["Declares a binding".to_string(), "Loops".to_string()],
            "Declares a binding",
        )
        .unwrap(),
        Question::new(
            QuestionId::new(id * 100 + 1),
            "Pick the keyword",
            vec!["fn".to_string(), "func".to_string()],
            "fn",
        )
        .unwrap(),
    ];
    Challenge::new(
        ChallengeId::new(id),
        title,
        Level::Easy,
        Language::new(LanguageId::new(6), "Rust"),
        questions,
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, Vec::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Sign in"), "missing sign-in in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("Password"), "missing password field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_list_smoke_renders_cards() {
    let challenges = vec![build_challenge(1, "Arrays"), build_challenge(2, "Graphs")];
    let mut harness = setup_view_harness(ViewKind::List, challenges);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Arrays"), "missing challenge in {html}");
    assert!(html.contains("Graphs"), "missing challenge in {html}");
    assert!(html.contains("Attempt Challenge"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_list_smoke_shows_completed_badge() {
    let challenges = vec![build_challenge(1, "Arrays")];
    let mut harness = setup_view_harness(ViewKind::List, challenges);

    // Fully complete challenge 1 before the view loads.
    let progress = harness.services.progress();
    progress.record_completion(ChallengeId::new(1), QuestionId::new(100), "Arrays", 2);
    progress.record_completion(ChallengeId::new(1), QuestionId::new(101), "Arrays", 2);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Completed"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_list_smoke_falls_back_on_fetch_error() {
    let mut harness = setup_view_harness_failing(ViewKind::List);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("No challenges available."),
        "missing empty fallback in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_detail_smoke_renders_questions_and_progress() {
    let challenges = vec![build_challenge(7, "Arrays")];
    let mut harness = setup_view_harness(ViewKind::Detail(7), challenges);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Arrays"), "missing title in {html}");
    assert!(
        html.contains("What does `let` do?"),
        "missing question in {html}"
    );
    assert!(
        html.contains("Progress: 0 / 2"),
        "missing progress line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_detail_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Detail(999), Vec::new());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Challenge not found."),
        "missing not-found fallback in {html}"
    );
}
