mod common;

use common::SAMPLE_TSV;
use serde_json::Value;
use tsv2resume_core::AnyEmptyResult;

#[test]
fn html_output_is_written() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.tsv");
	let output = tmp.path().join("site").join("resume.html");
	std::fs::write(&input, SAMPLE_TSV)?;

	common::tsv2resume_cmd()
		.arg(&input)
		.arg(&output)
		.assert()
		.success()
		.stdout(predicates::str::contains("Generated"))
		.stdout(predicates::str::contains("with 2 sections."));

	let html = std::fs::read_to_string(&output)?;
	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<title>resume</title>"));
	assert!(html.contains("<h1 class=\"title\">resume</h1>"));
	assert!(html.contains("<div class=\"entry entry--two\" id=\"work\">"));
	assert!(html.contains("<div class=\"entry\" id=\"acme-inc\">"));
	assert!(html.contains("<div class=\"line-meta\"><p>2020-2022</p></div>"));
	assert!(html.contains("<details class=\"fold desc\">"));
	assert!(html.contains("<div class=\"fold-meta\"><p>2021</p></div>"));

	Ok(())
}

#[test]
fn title_flag_overrides_file_name() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.tsv");
	let output = tmp.path().join("resume.html");
	std::fs::write(&input, SAMPLE_TSV)?;

	common::tsv2resume_cmd()
		.arg(&input)
		.arg(&output)
		.arg("--title")
		.arg("Jane Doe")
		.assert()
		.success();

	let html = std::fs::read_to_string(&output)?;
	assert!(html.contains("<title>Jane Doe</title>"));

	Ok(())
}

#[test]
fn json_format_writes_section_tree() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.tsv");
	let output = tmp.path().join("resume.json");
	std::fs::write(&input, SAMPLE_TSV)?;

	common::tsv2resume_cmd()
		.arg(&input)
		.arg(&output)
		.arg("--format")
		.arg("json")
		.assert()
		.success();

	let value: Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
	assert_eq!(value[0]["label"], "Work");
	assert_eq!(value[1]["label"], "Acme Inc");
	assert_eq!(value[1]["rows"][0]["type"], "pair");
	assert_eq!(value[1]["rows"][1]["type"], "description");
	assert_eq!(value[1]["rows"][2]["type"], "fold_block");
	assert_eq!(value[1]["rows"][2]["items"][0]["meta"], "2021");

	Ok(())
}

#[test]
fn missing_input_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tsv2resume_cmd()
		.arg(tmp.path().join("missing.tsv"))
		.arg(tmp.path().join("resume.html"))
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("input file not found"));

	assert!(!tmp.path().join("resume.html").exists());

	Ok(())
}

#[test]
fn header_only_input_renders_empty_page() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.tsv");
	let output = tmp.path().join("empty.html");
	std::fs::write(&input, "heading\tcontent\tmeta\n")?;

	common::tsv2resume_cmd()
		.arg(&input)
		.arg(&output)
		.assert()
		.success()
		.stdout(predicates::str::contains("with 0 sections."));

	let html = std::fs::read_to_string(&output)?;
	assert!(html.contains("<h1 class=\"title\">empty</h1>"));
	assert!(!html.contains("<section"));

	Ok(())
}

#[test]
fn config_in_current_directory_is_used() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("input.tsv"), SAMPLE_TSV)?;
	std::fs::write(
		tmp.path().join("tsv2resume.toml"),
		"title = \"From Config\"\nauto_paragraph = false\n",
	)?;

	common::tsv2resume_cmd()
		.current_dir(tmp.path())
		.arg("input.tsv")
		.arg("resume.html")
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("resume.html"))?;
	assert!(html.contains("<title>From Config</title>"));
	assert!(html.contains("<div class=\"line-main\">Engineer</div>"));

	Ok(())
}

#[test]
fn explicit_config_and_custom_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_dir = tmp.path().join("conf");
	std::fs::create_dir_all(&config_dir)?;
	std::fs::write(tmp.path().join("input.tsv"), SAMPLE_TSV)?;
	std::fs::write(
		config_dir.join("resume.toml"),
		"template = \"shell.html\"\n",
	)?;
	std::fs::write(config_dir.join("shell.html"), "<custom>{{ title }}</custom>\n{{ body }}")?;

	common::tsv2resume_cmd()
		.current_dir(tmp.path())
		.arg("input.tsv")
		.arg("out.html")
		.arg("--config")
		.arg(config_dir.join("resume.toml"))
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("out.html"))?;
	assert!(html.starts_with("<custom>out</custom>\n      <h1 class=\"title\">out</h1>"));

	Ok(())
}

#[test]
fn no_auto_paragraph_flag_copies_fields() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.tsv");
	let output = tmp.path().join("resume.html");
	std::fs::write(&input, SAMPLE_TSV)?;

	common::tsv2resume_cmd()
		.arg(&input)
		.arg(&output)
		.arg("--no-auto-paragraph")
		.assert()
		.success();

	let html = std::fs::read_to_string(&output)?;
	assert!(html.contains("<div class=\"desc\">Built X</div>"));

	Ok(())
}

#[test]
fn missing_arguments_fail() {
	common::tsv2resume_cmd().assert().failure();
}
