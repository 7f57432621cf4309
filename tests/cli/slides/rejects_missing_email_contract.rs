use crate::harness::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn slides_without_email_fails_before_network() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let untouched = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .env("GOOGLE_OAUTH_ACCESS_TOKEN", "ya29.test")
        .args(["slides", "-b", "Acme", "-d", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("recipient email is required"));

    untouched.assert();
}

#[test]
fn slides_without_access_token_fails_before_completion() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let untouched = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["slides", "-b", "Acme", "-d", "Cloud tools.", "-e", "ops@acme.test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_OAUTH_ACCESS_TOKEN"));

    untouched.assert();
}
