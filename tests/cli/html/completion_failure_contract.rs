use crate::harness::{TestContext, completion_server};
use predicates::prelude::*;

#[test]
fn completion_error_aborts_without_output_file() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _failure = completion_server::failing(&mut server, 500);
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "-b", "Acme", "-d", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Completion API returned status 500"))
        .stderr(predicate::str::contains("The server had an error"));

    assert!(!ctx.html_output().exists());
}

#[test]
fn rejected_api_key_is_reported() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _failure = completion_server::failing(&mut server, 401);
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "-b", "Acme", "-d", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("status 401"));
}
