//! `package` = `clean` then `zip`; nothing is uploaded.

mod common;

use common::*;

#[cfg(unix)]
#[test]
fn package_builds_the_archive_without_uploading() {
    let env = TestEnv::builder()
        .with_manifest(r#"{"name":"orders"}"#)
        .with_tool_script("zip", "#!/bin/sh\nprintf 'PK' > \"$4\"\n")
        .with_tool_script("aws", "#!/bin/sh\ntouch \"$(dirname \"$0\")/aws.called\"\n")
        .build();
    env.write_target_file("dist/stale.txt", "old");

    let result = env.run(&["package"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_exists!(env, "dist/orders.zip");
    assert_exists!(env, "dist/orders/package.json");
    assert_not_exists!(env, "dist/stale.txt");
    assert!(!env.root_path("bin/aws.called").exists());
    assert!(result.stdout.contains("orders.zip"));
    assert!(result.stdout.contains("sha256:"));
}

#[cfg(unix)]
#[test]
fn compile_failure_stops_before_zip() {
    let env = TestEnv::builder()
        .with_tool_script("npx", "#!/bin/sh\necho 'index.ts:1:1: ERROR: Expected \";\"' >&2\nexit 1\n")
        .with_tool_script("zip", "#!/bin/sh\ntouch \"$(dirname \"$0\")/zip.called\"\n")
        .build();

    let result = env.run(&["package"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("'compile:release' failed"), "{}", result.stderr);
    assert!(!env.root_path("bin/zip.called").exists());
}

#[test]
fn npm_without_manifest_is_skipped() {
    let env = TestEnv::builder().build();

    let result = env.run(&["npm"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("skipping dependency install"));
}

#[test]
fn upload_without_archive_fails() {
    let env = TestEnv::builder().build();

    let result = env.run(&["upload"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("artifact not found"), "{}", result.stderr);
}

#[test]
fn upload_without_develop_name_fails() {
    let env = TestEnv::builder()
        .with_config("[functionName]\nproduction = \"orders-prod\"\n")
        .build();
    env.write_target_file("dist/orders.zip", "PK");

    let result = env.run(&["upload"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("no function name configured for develop mode"),
        "{}",
        result.stderr
    );
}
