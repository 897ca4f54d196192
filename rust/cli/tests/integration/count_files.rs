use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use crate::helpers::REFERENCE_LINES;

use serde_json::Value;

#[test]
fn counts_reference_file() {
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.create_file("hands.txt", REFERENCE_LINES).expect("write");
    let cli = CliRunner::new().expect("CliRunner init");

    let res = cli.run(&["count", "--input", &input.to_string_lossy()]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout, "Player 1: 3\nPlayer 2: 2\n");
    assert!(res.stderr.is_empty());
}

#[test]
fn counts_stdin_when_input_is_dash() {
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run_with_input(&["count", "--input", "-"], REFERENCE_LINES);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "Player 1: 3\nPlayer 2: 2\n");
}

#[test]
fn counts_zstd_input_as_json() {
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm
        .create_compressed("hands.txt.zst", REFERENCE_LINES)
        .expect("write");
    let cli = CliRunner::new().expect("CliRunner init");

    let res = cli.run(&["count", "--input", &input.to_string_lossy(), "--format", "json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).expect("json report");
    assert_eq!(json["player1"], 3);
    assert_eq!(json["player2"], 2);
    assert_eq!(json["ties"], 0);
    assert_eq!(json["errors"], 0);
    assert_eq!(json["lines"], 5);
}

#[test]
fn malformed_lines_are_reported_and_skipped() {
    let content = "\
4H 4C 6S 7S KD 2C 3S 9S 9D TD

4H 4C 6S 7S KD 2C 3S 9S 9D
2H 3D 4C 5S 7H 2D 3H 4S 5C 7D
4H 4C 6S 7S KD 2C 3S 9S 9D 1D
AH KH QH JH TH AH 2C 3C 4C 5C
";
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.create_file("mixed.txt", content).expect("write");
    let cli = CliRunner::new().expect("CliRunner init");

    let res = cli.run(&["count", "--input", &input.to_string_lossy()]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(
        res.stdout,
        "Player 1: 0\nPlayer 2: 1\nTied    : 1\nErrors  : 3\n"
    );
    let errors: Vec<&str> = res.stderr.lines().collect();
    assert_eq!(
        errors,
        vec![
            "Error: Line 3: Hands with 9 cards",
            "Error: Line 5: Invalid rank code: 1",
            "Error: Line 6: Duplicate card AH",
        ]
    );
}

#[test]
fn non_utf8_line_does_not_abort_the_count() {
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.path("bytes.txt");
    let mut content: Vec<u8> = Vec::new();
    content.extend_from_slice(b"5D 8C 9S JS AC 2C 5C 7D 8S QH\n");
    content.extend_from_slice(b"5D 8C 9S JS \xff\xfe 2C 5C 7D 8S QH\n");
    content.extend_from_slice(b"2H 2D 4C 4D 4S 3C 3D 3S 9S 9D\n");
    std::fs::write(&input, content).expect("write");
    let cli = CliRunner::new().expect("CliRunner init");

    let res = cli.run(&["count", "--input", &input.to_string_lossy()]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout, "Player 1: 2\nPlayer 2: 0\nErrors  : 1\n");
    assert!(res.stderr.starts_with("Error: Line 2: Invalid rank code"));
}

#[test]
fn flags_relax_line_policy() {
    let content = "4h 4c 6s 7s kd 2c 3s 9s 9d td\nAH KH QH JH TH AH 2C 3C 4C 5C\n";
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.create_file("relaxed.txt", content).expect("write");
    let cli = CliRunner::new().expect("CliRunner init");
    let path = input.to_string_lossy();

    let strict = cli.run(&["count", "--input", &path]);
    assert!(strict.stdout.contains("Errors  : 2"));

    let relaxed = cli.run(&[
        "count",
        "--input",
        &path,
        "--ignore-case",
        "--allow-duplicates",
    ]);
    assert_eq!(relaxed.exit_code, 0);
    assert_eq!(relaxed.stdout, "Player 1: 1\nPlayer 2: 1\n");
    assert!(relaxed.stderr.is_empty());
}

#[test]
fn log_file_gets_one_record_per_line() {
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.create_file("hands.txt", REFERENCE_LINES).expect("write");
    let log = tfm.path("logs/showdown.jsonl");
    let cli = CliRunner::new().expect("CliRunner init");

    let res = cli.run(&[
        "count",
        "--input",
        &input.to_string_lossy(),
        "--log",
        &log.to_string_lossy(),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = std::fs::read_to_string(&log).expect("log written");
    let records: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("jsonl"))
        .collect();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["outcome"], "second_wins");
    assert_eq!(records[0]["first_eval"], "One pair 4");
    assert_eq!(records[4]["outcome"], "first_wins");
    assert!(records.iter().all(|r| r["ts"].is_string()));
}

#[test]
fn missing_input_file_exits_two() {
    let tfm = TempFileManager::new().expect("tfm");
    let cli = CliRunner::new().expect("CliRunner init");
    let res = cli.run(&["count", "--input", &tfm.path("absent.txt").to_string_lossy()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.starts_with("Error: Invalid input: Failed to read"));
}
