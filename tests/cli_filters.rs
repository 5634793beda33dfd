//! CLI integration tests
//!
//! These tests run the built filter binaries with documents piped to stdin
//! and check stdout and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const CACHE_NODES: &str = env!("CARGO_BIN_EXE_cloudpick-cache-nodes");
const INSTANCE_IDS: &str = env!("CARGO_BIN_EXE_cloudpick-instance-ids");
const INSTANCE_STATES: &str = env!("CARGO_BIN_EXE_cloudpick-instance-states");
const SECURITY_GROUPS: &str = env!("CARGO_BIN_EXE_cloudpick-security-groups");
const TAGS: &str = env!("CARGO_BIN_EXE_cloudpick-tags");

const ALL_FILTERS: [&str; 5] = [CACHE_NODES, INSTANCE_IDS, INSTANCE_STATES, SECURITY_GROUPS, TAGS];

/// Run a filter binary with `input` on stdin
fn run_filter(bin: &str, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn filter");

    child
        .stdin
        .take()
        .expect("No stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for filter")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cache_nodes_scenario() {
    let input = r#"{"CacheClusters":[{"CacheNodes":[{"Endpoint":{"Address":"a.example.com"}}]},{"CacheNodes":[]}]}"#;
    let output = run_filter(CACHE_NODES, &[], input);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "a.example.com\nunknown\n");
}

#[test]
fn test_instance_states_scenario() {
    let input = r#"{"InstanceStatuses":[{"InstanceState":{"Name":"running"}},{"InstanceState":{"Name":"stopped"}}]}"#;
    let output = run_filter(INSTANCE_STATES, &[], input);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "running\nstopped\n");
}

#[test]
fn test_security_groups_scenario() {
    let input = r#"{"SecurityGroups":[{"GroupId":"sg-1"},{"GroupId":null},{"GroupId":"sg-3"}]}"#;
    let output = run_filter(SECURITY_GROUPS, &[], input);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "sg-1\nunknown\nsg-3\n");
}

#[test]
fn test_instance_ids_and_tags() {
    let output = run_filter(
        INSTANCE_IDS,
        &[],
        r#"{"Instances":[{"InstanceId":"i-1"},{"InstanceId":"i-2"}]}"#,
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "i-1\ni-2\n");

    let output = run_filter(
        TAGS,
        &[],
        r#"{"Tags":[{"Key":"Name","ResourceId":"i-1"},{"Key":"Env","ResourceId":"vol-2"}]}"#,
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "i-1\nvol-2\n");
}

#[test]
fn test_malformed_input_guarded_filters_print_sentinel() {
    for bin in [CACHE_NODES, INSTANCE_STATES, SECURITY_GROUPS] {
        let output = run_filter(bin, &[], "{\"truncated\": [");
        assert!(output.status.success(), "{} should exit successfully", bin);
        assert_eq!(stdout_of(&output), "unknown\n");
    }
}

#[test]
fn test_malformed_input_unguarded_filters_fail() {
    for bin in [INSTANCE_IDS, TAGS] {
        let output = run_filter(bin, &[], "{\"truncated\": [");
        assert!(!output.status.success(), "{} should fail", bin);
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("not valid JSON"), "unexpected stderr: {}", stderr);
    }
}

#[test]
fn test_deeply_nested_input_guarded_filter_prints_sentinel() {
    let depth = 20_000;
    let input = format!(
        r#"{{"SecurityGroups":[{{"GroupId":"sg-1","x":{}{}}}]}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let output = run_filter(SECURITY_GROUPS, &[], &input);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_of(&output), "unknown\n");
}

#[test]
fn test_lone_surrogate_guarded_filter_prints_sentinel() {
    let output = run_filter(SECURITY_GROUPS, &[], r#"{"SecurityGroups":[{"GroupId":"\ud800x"}]}"#);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "unknown\n");
}

#[test]
fn test_null_instance_id_fails() {
    let output = run_filter(INSTANCE_IDS, &[], r#"{"Instances":[{"InstanceId":null}]}"#);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_sequences() {
    let cases = [
        (CACHE_NODES, r#"{"CacheClusters": []}"#, "unknown\n"),
        (INSTANCE_STATES, r#"{"InstanceStatuses": []}"#, "unknown\n"),
        (SECURITY_GROUPS, r#"{"SecurityGroups": []}"#, "unknown\n"),
        (INSTANCE_IDS, r#"{"Instances": []}"#, ""),
        (TAGS, r#"{"Tags": []}"#, ""),
        (INSTANCE_IDS, r#"{"Instances": {}}"#, ""),
        (TAGS, r#"{"Tags": ""}"#, ""),
    ];

    for (bin, input, expected) in cases {
        let output = run_filter(bin, &[], input);
        assert!(output.status.success(), "{} should exit successfully", bin);
        assert_eq!(stdout_of(&output), expected, "{}", bin);
    }
}

#[test]
fn test_on_error_overrides_default_policy() {
    let output = run_filter(TAGS, &["--on-error", "sentinel"], "not json");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "unknown\n");

    let output = run_filter(SECURITY_GROUPS, &["--on-error", "fail"], "not json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_custom_sentinel() {
    let input = r#"{"SecurityGroups":[{"GroupId":""},{"GroupId":"sg-2"}]}"#;
    let output = run_filter(SECURITY_GROUPS, &["--sentinel", "N/A"], input);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "N/A\nsg-2\n");
}

#[test]
fn test_recovered_error_is_logged_to_stderr() {
    let output = run_filter(INSTANCE_STATES, &[], r#"{"InstanceStatuses": [{"InstanceState": {}}]}"#);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "unknown\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InstanceStatuses[0].InstanceState.Name"), "unexpected stderr: {}", stderr);

    let output = run_filter(INSTANCE_STATES, &["--log-level", "off"], r#"{"InstanceStatuses": [{"InstanceState": {}}]}"#);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_input_file_argument() {
    let path = std::env::temp_dir().join(format!("cloudpick-tags-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"Tags":[{"ResourceId":"i-9"}]}"#).expect("Failed to write input file");

    let output = run_filter(TAGS, &[path.to_str().expect("Non-UTF-8 temp path")], "");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "i-9\n");
}

#[test]
fn test_missing_input_file_fails_regardless_of_policy() {
    let output = run_filter(CACHE_NODES, &["/nonexistent/cloudpick/input.json"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_output_is_idempotent() {
    let input = r#"{"CacheClusters":[{"CacheNodes":[{"Endpoint":{"Address":"a"}},{"Endpoint":{"Address":"b"}}]}]}"#;
    let first = run_filter(CACHE_NODES, &[], input);
    let second = run_filter(CACHE_NODES, &[], input);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_help_lists_shared_flags() {
    for bin in ALL_FILTERS {
        let output = Command::new(bin).arg("--help").output().expect("Failed to run --help");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("--on-error"), "{}", bin);
        assert!(stdout.contains("--sentinel"), "{}", bin);
    }
}
