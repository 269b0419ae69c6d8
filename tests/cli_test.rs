#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_null-account"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_display_prints_final_quantity() {
    let output = run_cli(&["--log", "null", "deposit:5", "withdraw:2"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Quantity: 3\n");
}

#[test]
fn test_console_log_and_json_snapshot() {
    let output = run_cli(&["--opening-quantity", "-4", "--json", "deposit:10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.splitn(3, '\n');
    assert_eq!(
        lines.next(),
        Some("BankAccount: Deposit of 10 made. New balance is 6")
    );
    assert_eq!(lines.next(), Some("Quantity: 6"));

    let json: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "quantity": 6 }));
}

#[test]
fn test_invalid_operation_exits_with_recovery_hint() {
    let output = run_cli(&["--log", "null", "transfer:3"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not understand operation 'transfer:3'"));
    assert!(stderr.contains("Write operations as deposit:<amount> or withdraw:<amount>"));
}

#[test]
fn test_memory_sink_is_not_offered() {
    let output = run_cli(&["--log", "memory"]);

    assert!(!output.status.success());
}
