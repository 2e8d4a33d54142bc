use std::process::Command;

#[test]
fn test_help_points_at_task_listing() {
    let bin = env!("CARGO_BIN_EXE_lambda-tasks");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'lambda-tasks lambda' to list the available tasks."),
        "help output should mention the task listing; got:\n{}",
        stdout
    );
    assert!(stdout.contains("--production"));
    assert!(stdout.contains("--dir"));
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_lambda-tasks");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_task_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_lambda-tasks");

    let output = Command::new(bin).arg("publish").output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
