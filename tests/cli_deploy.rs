//! Integration tests for `practice-log deploy`.

mod common;

use common::*;

#[test]
fn deploy_without_data_file_fails() {
    let env = TestEnv::new();

    let result = env.run(&["deploy"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Data file not found"), "{}", result.stderr);
}

#[test]
fn deploy_dry_run_lists_steps_in_order() {
    let env = TestEnv::new().with_file("public/data.json", "[]");

    let result = env.run(&["deploy", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    let stage = result.stdout.find("stage").unwrap();
    let commit = result.stdout.find("commit").unwrap();
    let push = result.stdout.find("push").unwrap();
    let publish = result.stdout.find("publish").unwrap();
    assert!(stage < commit && commit < push && push < publish);
    assert!(result.stdout.contains("Auto update data: "));
}

#[test]
fn deploy_dry_run_json() {
    let env = TestEnv::new()
        .with_file("public/data.json", "[]")
        .with_file("practice-log.toml", "[deploy]\nbranch = \"gh-pages\"\npublish = []\n");

    let result = env.run(&["--json", "deploy", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    let steps: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1]["soft"], true);
    assert_eq!(steps[2]["command"], "git push origin gh-pages");
}

#[test]
fn deploy_outside_git_repo_fails_at_stage() {
    let env = TestEnv::new()
        .with_file("public/data.json", "[]")
        .with_file("practice-log.toml", CONFIG_PUBLISH_TRUE);

    let result = env.run(&["deploy"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("stage step failed"),
        "{}",
        result.stderr
    );
}

#[test]
fn deploy_rejects_malformed_data_file() {
    let env = TestEnv::new()
        .with_file("public/data.json", r#"[{"date":"2025-03-05","count":3,"problems":[]}]"#)
        .with_file("practice-log.toml", CONFIG_PUBLISH_TRUE);

    let result = env.run(&["deploy", "--dry-run"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("Refusing to deploy invalid data file"),
        "{}",
        result.stderr
    );
    assert!(!result.stdout.contains("git add"));
}
