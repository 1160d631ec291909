use offside_club::capture::CaptureForm;
use offside_club::capture::HttpSaveEmail;
use offside_club::capture::Outcome;
use offside_club::capture::SaveEmailAction;
use offside_club::capture::Variant;
use offside_club::persistence::SaveEmailResult;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;
use crate::helpers::RecordingNotifier;

#[tokio::test]
async fn form_against_real_server() {
    let app = spawn_app().await;
    let action = HttpSaveEmail::new(&app.addr);
    let notifier = RecordingNotifier::default();
    let mut form = CaptureForm::with_input("user@example.com");

    let outcome = form.on_submit(&action, &notifier).await;

    assert_eq!(outcome, Some(Outcome::Saved));
    assert_eq!(form.input(), "");
    let notes = notifier.taken();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].variant, Variant::Confirmation);
    assert_eq!(app.stored_lines().await.len(), 1);
}

// the server does not trust the form
#[tokio::test]
async fn server_revalidates() {
    let app = spawn_app().await;
    let action = HttpSaveEmail::new(&format!("{}/", app.addr));

    let result = action.save_email("not-an-email").await.unwrap();

    assert_eq!(result, SaveEmailResult::failed("Correo electrónico inválido."));
    assert!(app.stored_lines().await.is_empty());
}

#[tokio::test]
async fn server_error_status_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/save-email"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = CaptureForm::with_input("user@example.com");
    let outcome = form
        .on_submit(&HttpSaveEmail::new(&server.uri()), &notifier)
        .await;

    assert_eq!(outcome, Some(Outcome::Unexpected));
    assert_eq!(form.input(), "user@example.com");
    assert!(!form.is_submitting());
    let notes = notifier.taken();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description, "Hubo un problema inesperado. Intenta de nuevo.");
}

#[tokio::test]
async fn garbled_body_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/save-email"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = CaptureForm::with_input("user@example.com");
    let outcome = form
        .on_submit(&HttpSaveEmail::new(&server.uri()), &notifier)
        .await;

    assert_eq!(outcome, Some(Outcome::Unexpected));
    assert_eq!(form.input(), "user@example.com");
}

#[tokio::test]
async fn failure_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/save-email"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })),
        )
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = CaptureForm::with_input("user@example.com");
    let outcome = form
        .on_submit(&HttpSaveEmail::new(&server.uri()), &notifier)
        .await;

    assert_eq!(outcome, Some(Outcome::Failed(None)));
    assert_eq!(
        notifier.taken()[0].description,
        "Hubo un problema al guardar tu correo. Intenta de nuevo."
    );
    assert_eq!(form.input(), "user@example.com");
}

#[tokio::test]
async fn preflight_rejections_never_call_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let action = HttpSaveEmail::new(&server.uri());
    for input in ["", "  ", "not-an-email"] {
        let mut form = CaptureForm::with_input(input);
        form.on_submit(&action, &notifier).await;
    }
    assert_eq!(notifier.taken().len(), 3);
    // `expect(0)` is verified when `server` is dropped
}
