use offside_club::domain::SubscriptionRecord;
use offside_club::persistence::SaveEmailResult;

use crate::helpers::spawn_app;

#[tokio::test]
async fn valid_email_appends_one_record() {
    let app = spawn_app().await;

    let result = app.save_email("user@example.com").await;

    assert_eq!(result, SaveEmailResult::saved());
    let lines = app.stored_lines().await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("INSERT INTO subscribers (email, subscribed_at) VALUES ("));
    let record = SubscriptionRecord::parse_line(&lines[0]).unwrap();
    assert_eq!(record.email().as_ref(), "user@example.com");
}

#[tokio::test]
async fn invalid_email_is_rejected_as_data() {
    let app = spawn_app().await;

    for email in ["", "   ", "not-an-email", "john@", "john@localhost"] {
        let result = app.save_email(email).await;
        assert_eq!(
            result,
            SaveEmailResult::failed("Correo electrónico inválido."),
            "{email:?}"
        );
    }
    assert!(app.stored_lines().await.is_empty());
    // rejected before any I/O
    assert!(!app.store_dir.exists());
}

#[tokio::test]
async fn result_json_omits_absent_error() {
    let app = spawn_app().await;

    let resp = app
        .post_save_email(&serde_json::json!({ "email": "user@example.com" }))
        .await;
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = spawn_app().await;

    for (body, msg) in [
        (serde_json::json!({}), "no email"),
        (serde_json::json!({ "email": 42 }), "email not a string"),
    ] {
        let resp = app.post_save_email(&body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
    }
    assert!(app.stored_lines().await.is_empty());
}

#[tokio::test]
async fn quote_cannot_break_records() {
    let app = spawn_app().await;

    assert!(app.save_email("o'brien@example.com").await.success);
    assert!(app.save_email("x'); DELETE FROM subscribers; --@example.com").await.success);
    assert!(app.save_email("after@example.com").await.success);

    let lines = app.stored_lines().await;
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("VALUES ('o''brien@example.com', "));
    let emails: Vec<String> = lines
        .iter()
        .map(|l| SubscriptionRecord::parse_line(l).unwrap().email().to_string())
        .collect();
    assert_eq!(
        emails,
        [
            "o'brien@example.com",
            "x'); DELETE FROM subscribers; --@example.com",
            "after@example.com"
        ]
    );
}

#[tokio::test]
async fn fresh_store_directory_is_created() {
    let app = spawn_app().await;
    assert!(!app.store_dir.exists());

    assert!(app.save_email("user@example.com").await.success);

    assert!(app.store_dir.is_dir());
    assert_eq!(app.stored_lines().await.len(), 1);
}

#[tokio::test]
async fn existing_store_directory_is_fine() {
    let app = spawn_app().await;
    tokio::fs::create_dir_all(&app.store_dir).await.unwrap();

    assert_eq!(app.save_email("a@example.com").await, SaveEmailResult::saved());
    assert_eq!(app.save_email("b@example.com").await, SaveEmailResult::saved());

    assert_eq!(app.stored_lines().await.len(), 2);
}

#[tokio::test]
async fn storage_failure_does_not_leak_details() {
    let app = spawn_app().await;
    // a regular file where the store directory should go
    tokio::fs::create_dir_all(app.store_dir.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(&app.store_dir, "").await.unwrap();

    let result = app.save_email("user@example.com").await;

    assert_eq!(
        result,
        SaveEmailResult::failed("Error interno del servidor al guardar el correo.")
    );
    let message = result.error.unwrap();
    assert!(!message.contains(&*app.store_dir.to_string_lossy()));
}

#[tokio::test]
async fn concurrent_submissions_all_land() {
    let app = spawn_app().await;
    let n = 32;

    let handles: Vec<_> = (0..n)
        .map(|i| {
            let client = app.api_client.clone();
            let url = format!("{}/api/save-email", app.addr);
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&serde_json::json!({ "email": format!("user{i}@example.com") }))
                    .send()
                    .await
                    .expect("execute request")
                    .json::<SaveEmailResult>()
                    .await
                    .expect("parse result")
            })
        })
        .collect();
    for h in handles {
        assert!(h.await.unwrap().success);
    }

    let lines = app.stored_lines().await;
    assert_eq!(lines.len(), n);
    let mut emails: Vec<String> = lines
        .iter()
        .map(|l| SubscriptionRecord::parse_line(l).unwrap().email().to_string())
        .collect();
    emails.sort();
    let mut expected: Vec<String> = (0..n).map(|i| format!("user{i}@example.com")).collect();
    expected.sort();
    assert_eq!(emails, expected);
}
