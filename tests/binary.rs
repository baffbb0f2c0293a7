use std::process::Command;

fn fixture_binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_member-fixture"));
    command.env_remove("LOG_LOCATION").env_remove("RUST_LOG");
    command
}

#[test]
fn no_arguments_does_nothing() {
    let output = fixture_binary().output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn demo_prints_the_walkthrough() {
    let output = fixture_binary().arg("--demo").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"This is an external function call."));
    assert_eq!(
        lines.last(),
        Some(&"Destructor called for MyClass object.")
    );
    assert!(lines.contains(&"Sum of local numbers: 15"));
}
