use crate::harness::{TestContext, completion_server};
use predicates::prelude::*;

#[test]
fn html_writes_presentation_file_from_completions() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let completions = completion_server::answering(&mut server, "- Students\n- Startups", 5);
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "--brand", "Acme", "--description", "Cloud tools."])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote 5C analysis to"))
        .stderr(predicate::str::contains("Drafting Customers"));

    completions.assert();
    let html = ctx.read_html_output();
    assert!(html.contains("<h1 class=\"title\">5C Analysis: Acme</h1>"));
    assert_eq!(html.matches("<h2 class=\"title\">").count(), 5);
    assert!(html.contains("<ul><li>- Students</li><li>- Startups</li></ul>"));
}

#[test]
fn html_alias_prints_document_to_stdout() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _completions = completion_server::answering(&mut server, "Text.", 5);
    ctx.write_config_for(&server.url());

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["h", "-b", "Acme", "-d", "Cloud tools.", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stderr(predicate::str::contains("5c_analysis_presentation.html"));

    assert!(ctx.html_output().exists());
}

#[test]
fn html_honours_output_dir_and_secrets_file() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let completions = completion_server::answering(&mut server, "Text.", 5);
    ctx.write_config_for(&server.url());
    ctx.write_file(".fivec/secrets.toml", "OPENAI_API_KEY = \"sk-test\"\n");

    ctx.cli()
        .args(["html", "-b", "Acme", "-d", "Cloud tools.", "--output-dir", "out"])
        .assert()
        .success();

    completions.assert();
    assert!(ctx.work_dir().join("out/5c_analysis_presentation.html").exists());
    assert!(!ctx.html_output().exists());
}
