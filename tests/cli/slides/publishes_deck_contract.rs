use crate::harness::{TestContext, completion_server};
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn slides_creates_shares_and_prints_edit_link() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let completions = completion_server::answering(&mut server, "Text.", 5);
    let create = server
        .mock("POST", "/v1/presentations")
        .match_header("authorization", "Bearer ya29.test")
        .with_status(200)
        .with_body(r#"{"presentationId":"deck-42"}"#)
        .expect(1)
        .create();
    let batches = server
        .mock("POST", "/v1/presentations/deck-42:batchUpdate")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create();
    let default_grant = server
        .mock("POST", "/drive/v3/files/deck-42/permissions")
        .match_body(Matcher::PartialJson(json!({ "emailAddress": "5c-analysis@brandlab.example" })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let recipient_grant = server
        .mock("POST", "/drive/v3/files/deck-42/permissions")
        .match_body(Matcher::PartialJson(json!({ "emailAddress": "ops@acme.test", "role": "writer" })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .env("GOOGLE_OAUTH_ACCESS_TOKEN", "ya29.test")
        .args(["slides", "-b", "Acme", "-d", "Cloud tools.", "--email", "ops@acme.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.google.com/presentation/d/deck-42/edit"))
        .stdout(predicate::str::contains("ops@acme.test"));

    completions.assert();
    create.assert();
    batches.assert();
    default_grant.assert();
    recipient_grant.assert();
}

#[test]
fn rejected_share_is_reported() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _completions = completion_server::answering(&mut server, "Text.", 5);
    let _create = server
        .mock("POST", "/v1/presentations")
        .with_status(200)
        .with_body(r#"{"presentationId":"deck-42"}"#)
        .create();
    let batches = server
        .mock("POST", "/v1/presentations/deck-42:batchUpdate")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let _grant = server
        .mock("POST", "/drive/v3/files/deck-42/permissions")
        .with_status(403)
        .with_body(r#"{"error":{"message":"The user does not have sufficient permissions"}}"#)
        .create();
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .env("GOOGLE_OAUTH_ACCESS_TOKEN", "ya29.test")
        .args(["s", "-b", "Acme", "-d", "Cloud tools.", "-e", "ops@acme.test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Permission grant failed"));

    batches.assert();
}
