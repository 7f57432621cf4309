use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn html_prompt_preview_needs_no_credentials() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["html", "-b", "Acme", "-d", "Cloud tools.", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Company ==="))
        .stdout(predicate::str::contains("=== Climate ==="))
        .stdout(predicate::str::contains("Write in bullet points about Acme's customer demographics"));

    assert!(!ctx.html_output().exists());
}

#[test]
fn slides_prompt_preview_does_not_ask_for_email() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["s", "-b", "Acme", "-d", "Cloud tools.", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Collaborators ==="));
}
