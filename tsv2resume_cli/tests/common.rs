use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn tsv2resume_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("tsv2resume"));
	cmd.env("NO_COLOR", "1");
	cmd
}

pub const SAMPLE_TSV: &str = "heading\tcontent\tmeta\nSECTION: Work\t\t\nAcme \
                              Inc\tEngineer\t2020-2022\n\tBuilt X\t\nHIDDEN\tMore\t\n\tDetail \
                              one\t2021\n";
