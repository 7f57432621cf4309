use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn html_without_description_fails_when_not_interactive() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "--brand", "Acme"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Please fill in all the fields: brand description is required",
        ));

    assert!(!ctx.html_output().exists());
}

#[test]
fn html_with_blank_brand_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["html", "--brand", "   ", "--description", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("brand name is required"));
}

#[test]
fn html_without_api_key_reports_missing_credential() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["html", "-b", "Acme", "-d", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credential 'OPENAI_API_KEY' not found"));
}
