//! End-to-end behavior of the library entry points against a real shell.

#![cfg(unix)]

use shello::{
    exec_with_shell, run_os_default_output, run_os_default_output_in_dir, run_shell_output,
    run_shell_output_in_dir, Shell, TrimPolicy,
};

#[test]
fn echo_is_trimmed_by_default() {
    let out = run_shell_output("echo x").unwrap();
    assert_eq!(out.into_parts(), ("x".to_string(), String::new()));
}

#[test]
fn echo_keeps_newline_when_preserving() {
    let shell = Shell::live().with_trim(TrimPolicy::Preserve);
    let out = shell.shell_output("echo x").unwrap();
    assert_eq!(out.stdout, "x\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn pwd_reports_requested_dir() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().canonicalize().unwrap();

    let out = run_shell_output_in_dir("pwd -P", dir.path()).unwrap();
    assert_eq!(out.stdout, expected.to_string_lossy());
}

#[test]
fn pwd_in_tmp() {
    let out = run_shell_output_in_dir("pwd", "/tmp").unwrap();
    assert!(out.stdout.contains("/tmp"), "{}", out.stdout);
}

#[test]
fn missing_dir_fails_without_output() {
    let err = run_shell_output_in_dir("echo hi", "/nonexistent-path").unwrap_err();
    assert!(err.is_spawn_failure());
    assert_eq!(err.stdout(), "");
    assert_eq!(err.stderr(), "");
}

#[test]
fn empty_dir_matches_no_dir() {
    let with_empty = run_shell_output_in_dir("pwd", "").unwrap();
    let without = run_shell_output("pwd").unwrap();
    assert_eq!(with_empty, without);
}

#[test]
fn bash_runs_sequential_statements() {
    let shell = Shell::live().with_trim(TrimPolicy::Preserve);
    let out = shell.exec_with_shell("bash", "echo a; echo b", "").unwrap();
    assert_eq!(out.stdout, "a\nb\n");
}

#[test]
fn newline_separated_statements_run_in_order() {
    let out = run_shell_output("echo Line 1\necho Line 2\necho Line 3 ").unwrap();
    assert_eq!(out.stdout, "Line 1\nLine 2\nLine 3");
}

#[test]
fn special_characters_pass_through() {
    let shell = Shell::live().with_trim(TrimPolicy::Preserve);
    let out = shell.exec_with_shell("bash", r#"echo '"Hello, World!"'"#, "").unwrap();
    assert_eq!(out.stdout, "\"Hello, World!\"\n");
}

#[test]
fn unknown_command_reports_on_stderr() {
    let err = exec_with_shell("bash", "not_a_real_command", "").unwrap_err();
    assert!(!err.is_spawn_failure());
    assert_eq!(err.stdout(), "");
    assert!(!err.stderr().is_empty());
    assert_eq!(err.exit_code(), Some(127));
}

#[test]
fn unknown_shell_is_a_spawn_failure() {
    let err = exec_with_shell("invalid_shell", "echo 'Hello, World!'", "").unwrap_err();
    assert!(err.is_spawn_failure());
    assert_eq!(err.stdout(), "");
    assert_eq!(err.stderr(), "");
}

#[test]
fn non_zero_exit_keeps_partial_output() {
    let err = run_shell_output("echo before; exit 3").unwrap_err();
    assert_eq!(err.exit_code(), Some(3));
    assert_eq!(err.stdout(), "before");
}

#[test]
fn failing_command_errors_under_both_policies() {
    for trim in [TrimPolicy::Trim, TrimPolicy::Preserve] {
        let shell = Shell::live().with_trim(trim);
        assert!(shell.shell_output("ls non_existent_file.txt").is_err(), "{trim:?}");
    }
}

#[test]
fn toggling_policy_affects_only_later_calls() {
    let mut shell = Shell::live();
    let first = shell.shell_output("echo x").unwrap();
    shell.set_trim(TrimPolicy::Preserve);
    let second = shell.shell_output("echo x").unwrap();
    shell.set_trim(TrimPolicy::Trim);

    assert_eq!(first.stdout, "x");
    assert_eq!(second.stdout, "x\n");
}

#[test]
fn os_default_uses_posix_shell_here() {
    let out = run_os_default_output("echo Hello").unwrap();
    assert_eq!(out.stdout, "Hello");

    let out = run_os_default_output_in_dir("pwd", "/").unwrap();
    assert_eq!(out.stdout, "/");
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || run_shell_output(&format!("echo {i}")).unwrap().stdout))
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, ["0", "1", "2", "3"]);
}

#[test]
fn print_variants_return_normally() {
    shello::run_shell_command("echo Hello from run_shell_command");
    shello::run_shell_command("not_a_real_command");
    shello::run_os_default("echo Hello from run_os_default");
    shello::run_os_default_in_dir("echo Hello from run_os_default_in_dir", ".");
}
