use crate::helpers::cli_runner::CliRunner;

const COMMANDS: [&str; 5] = ["count", "compare", "deal", "bench", "cfg"];

#[test]
fn help_lists_every_command() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for c in COMMANDS {
        assert!(res.stdout.contains(c), "help should list `{c}`:\n{}", res.stdout);
    }
}

#[test]
fn unknown_command_exits_two_with_usage() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["play"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: showdown <command> [options]"));
}

#[test]
fn compare_requires_two_hands() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["compare", "4H 4C 6S 7S KD"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.to_lowercase().contains("required"));
}

#[test]
fn invalid_report_format_is_a_usage_error() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["count", "--format", "yaml"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("yaml"));
}

#[test]
fn bench_reports_comparisons() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["bench", "--iters", "1000"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Benchmark: 1000 comparisons in "));
}
