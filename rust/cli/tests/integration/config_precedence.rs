use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use crate::helpers::REFERENCE_LINES;

use serde_json::Value;

#[test]
fn cfg_shows_defaults() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["ignore_case"]["value"], false);
    assert_eq!(json["allow_duplicates"]["value"], false);
    assert_eq!(json["format"]["value"], "text");
    assert!(json["seed"]["value"].is_null());
    for key in ["ignore_case", "allow_duplicates", "format", "seed"] {
        assert_eq!(json[key]["source"], "default");
    }
}

#[test]
fn env_overrides_file_and_sources_are_reported() {
    let tfm = TempFileManager::new().expect("tfm");
    let config = tfm
        .create_file(
            "showdown.toml",
            "ignore_case = true\nformat = \"json\"\nseed = 7\n",
        )
        .expect("write config");
    let config_path = config.to_string_lossy();
    let cli = CliRunner::new().expect("init");

    let res = cli.run_with_env(
        &["cfg"],
        &[("SHOWDOWN_CONFIG", &*config_path), ("SHOWDOWN_SEED", "99")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["ignore_case"]["value"], true);
    assert_eq!(json["ignore_case"]["source"], "file");
    assert_eq!(json["format"]["value"], "json");
    assert_eq!(json["format"]["source"], "file");
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["allow_duplicates"]["source"], "default");
}

#[test]
fn format_flag_overrides_env() {
    let tfm = TempFileManager::new().expect("tfm");
    let input = tfm.create_file("hands.txt", REFERENCE_LINES).expect("write");
    let path = input.to_string_lossy();
    let cli = CliRunner::new().expect("init");
    let env = [("SHOWDOWN_FORMAT", "json")];

    let from_env = cli.run_with_env(&["count", "--input", &path], &env);
    let json: Value = serde_json::from_str(&from_env.stdout).expect("json from env");
    assert_eq!(json["player1"], 3);

    let from_flag = cli.run_with_env(&["count", "--input", &path, "--format", "text"], &env);
    assert_eq!(from_flag.stdout, "Player 1: 3\nPlayer 2: 2\n");
}

#[test]
fn config_file_enables_ignore_case_for_count() {
    let tfm = TempFileManager::new().expect("tfm");
    let config = tfm
        .create_file("showdown.toml", "ignore_case = true\n")
        .expect("write config");
    let input = tfm
        .create_file("hands.txt", &REFERENCE_LINES.to_lowercase())
        .expect("write");
    let cli = CliRunner::new().expect("init");

    let res = cli.run_with_env(
        &["count", "--input", &input.to_string_lossy()],
        &[("SHOWDOWN_CONFIG", &*config.to_string_lossy())],
    );
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "Player 1: 3\nPlayer 2: 2\n");
}

#[test]
fn invalid_configuration_exits_two() {
    let tfm = TempFileManager::new().expect("tfm");
    let config = tfm
        .create_file("showdown.toml", "starting_stack = 100\n")
        .expect("write config");
    let cli = CliRunner::new().expect("init");

    let bad_file = cli.run_with_env(&["cfg"], &[("SHOWDOWN_CONFIG", &*config.to_string_lossy())]);
    assert_eq!(bad_file.exit_code, 2);
    assert!(bad_file.stderr.contains("Configuration error"));

    let bad_env = cli.run_with_env(
        &["count", "--input", "-"],
        &[("SHOWDOWN_IGNORE_CASE", "sometimes")],
    );
    assert_eq!(bad_env.exit_code, 2);
    assert!(bad_env.stderr.contains("Invalid ignore_case"));
}
