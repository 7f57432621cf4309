use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("fivec.toml", "[completion]\ntemperature = 0.2\n");

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "-b", "Acme", "-d", "Cloud tools."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn explicit_config_path_must_exist() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["html", "-b", "Acme", "-d", "Cloud tools.", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
