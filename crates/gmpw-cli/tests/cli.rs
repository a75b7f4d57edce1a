use assert_cmd::Command;
use serde_json::Value;

fn gmpw(args: &[&str]) -> String {
    let assert = Command::cargo_bin("gmpw")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(args)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_fixed_counts_summary_and_password() {
    let stdout = gmpw(&["-n", "10", "-d", "3", "-u", "2", "-l", "5", "--seed", "1"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[..3], ["numbers : 3", "lower letters: 5", "upper letters: 2"]);

    let password = lines[3];
    assert_eq!(password.len(), 10);
    assert_eq!(password.chars().filter(char::is_ascii_digit).count(), 3);
    assert_eq!(password.chars().filter(char::is_ascii_uppercase).count(), 2);
    assert_eq!(password.chars().filter(char::is_ascii_lowercase).count(), 5);
}

#[test]
fn test_default_avoids_ambiguous_characters() {
    for seed in 0..20 {
        let stdout = gmpw(&["-n", "20", "--seed", &seed.to_string()]);
        let password = stdout.lines().nth(3).unwrap();
        assert_eq!(password.len(), 20);
        assert!(!password.contains(['o', 'O', '0', 'l', '1']));
    }
}

#[test]
fn test_same_seed_same_password() {
    let first = gmpw(&["-n", "16", "-a", "false", "--seed", "99"]);
    let second = gmpw(&["-n", "16", "-a", "false", "--seed", "99"]);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_length_prints_help_and_exits_cleanly() {
    let stdout = gmpw(&["-n", "2"]);
    assert!(stdout.starts_with("Need a number between [3-20] as length, got 2."));
    assert!(stdout.contains("--length"));
    assert!(stdout.contains("Usage: gmpw -n10"));
}

#[test]
fn test_mismatched_counts_are_rejected() {
    let stdout = gmpw(&["-n", "10", "-d", "3", "-u", "2", "-l", "6"]);
    assert!(stdout.starts_with("Category counts add up to 11, but the password length is 10."));
    assert!(!stdout.contains("numbers :"));
}

#[test]
fn test_negative_count_is_rejected() {
    let stdout = gmpw(&["-n", "10", "--upper", "-1"]);
    assert!(stdout.starts_with("Invalid option argument. Option \"upper\", argument \"-1\"."));
}

#[test]
fn test_oversized_count_is_rejected() {
    let stdout = gmpw(&["-n", "10", "-d", "9223372036854775807", "-u", "1", "-l", "1"]);
    assert!(stdout.starts_with(
        "Invalid option argument. Option \"digit\", argument \"9223372036854775807\"."
    ));
    assert!(stdout.contains("Usage: gmpw -n10"));
}

#[test]
fn test_unparsable_switch_is_rejected() {
    let stdout = gmpw(&["-n", "10", "--avoid-ambiguous", "maybe"]);
    assert!(stdout.starts_with("Invalid option argument. Option \"avoid-ambiguous\", argument \"maybe\"."));
}

#[test]
fn test_json_output() {
    let stdout = gmpw(&["-n", "5", "-d", "2", "-o", "json", "--seed", "4"]);
    let output: Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(output["allocation"]["digits"], 2);
    let upper = output["allocation"]["upper"].as_u64().unwrap();
    let lower = output["allocation"]["lower"].as_u64().unwrap();
    assert_eq!(upper + lower, 3);
    assert_eq!(output["password"].as_str().unwrap().len(), 5);
    assert!(output.get("analysis").is_none());
}

#[test]
fn test_json_output_with_analysis() {
    let stdout = gmpw(&["-n", "12", "-o", "json", "--analyze", "--seed", "8"]);
    let output: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(output["analysis"]["strength"].is_string());
    assert_eq!(output["analysis"]["crack_times"].as_object().unwrap().len(), 4);
}

#[test]
fn test_missing_length_is_a_usage_error() {
    Command::cargo_bin("gmpw").unwrap().assert().failure();
}

#[test]
fn test_text_output_with_analysis() {
    let assert = Command::cargo_bin("gmpw")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(["-n", "12", "--analyze", "--seed", "1"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("numbers : "));
    assert!(lines[1].starts_with("lower letters: "));
    assert!(lines[2].starts_with("upper letters: "));
    assert_eq!(lines[3].len(), 12);
    assert!(stdout.contains("Security Analysis"));
    assert!(stdout.contains("Strength"));
    assert!(stdout.contains("Crack Times"));
}
