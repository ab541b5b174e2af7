use assert_cmd::Command;

pub fn takara_cmd() -> Command {
    let mut cmd = Command::cargo_bin("takara").unwrap();
    cmd.env_remove("TAKARA_ROOT");
    cmd
}
