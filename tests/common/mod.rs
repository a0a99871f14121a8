use assert_cmd::Command;

pub fn cardbox_cmd() -> Command {
    Command::cargo_bin("cardbox").unwrap()
}
