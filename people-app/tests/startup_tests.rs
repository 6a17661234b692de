use std::process::Command;

#[test]
fn invalid_port_exits_with_failure() {
    let status = Command::new(env!("CARGO_BIN_EXE_people-app"))
        .env("PEOPLE_PORT", "not-a-port")
        .env_remove("DATABASE_URL")
        .status()
        .unwrap();

    assert!(!status.success());
}
