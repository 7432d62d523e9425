use std::process::Command;

#[test]
fn test_help_mentions_default_command() {
    let bin = env!("CARGO_BIN_EXE_practice-log");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'practice-log' without a subcommand to generate and optionally deploy."),
        "help output should describe the default command; got:\n{}",
        stdout
    );
    for command in ["generate", "scan", "deploy"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}
