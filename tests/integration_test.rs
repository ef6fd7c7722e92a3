use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidemark"))
        .args(args)
        .env_remove("SLIDEMARK_DEFAULT_CSS")
        .env_remove("SLIDEMARK_DEFAULT_JS")
        .env_remove("SLIDEMARK_THEME")
        .output()
        .expect("Failed to execute command")
}

const DECK: &str = "---\ntitle: CLI Deck\n---\n\n# One\n\n<!-- paginate: true -->\n\n---\n\n# Two\n\n<!-- _backgroundColor: black -->\n";

#[test]
fn test_slides_command_prints_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let markdown_path = temp_dir.path().join("deck.md");
    fs::write(&markdown_path, DECK).expect("Failed to write markdown file");

    let output = run_command(&["slides", "-i", markdown_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["front_matter"]["title"], "CLI Deck");
    assert_eq!(json["slides"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["slides"][1]["directives"]["paginate"], true);
    assert_eq!(json["slides"][1]["directives"]["_backgroundColor"], "black");
}

#[test]
fn test_html_command_embeds_css() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, DECK).expect("Failed to write markdown file");
    let css_path = temp_path.join("deck.css");
    fs::write(&css_path, "body { font-family: Arial; }").expect("Failed to write CSS file");
    let output_path = temp_path.join("out").join("deck.html");

    let output = run_command(&[
        "html",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--css",
        css_path.to_str().unwrap(),
        "--theme",
        "gaia",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html.contains("<title>CLI Deck</title>"));
    assert!(html.contains("<body data-theme=\"gaia\">"));
    assert!(html.contains("<style>body { font-family: Arial; }</style>"));
    assert!(html.contains("style=\"background-color: black\""));
    assert!(html.contains("<span class=\"slide-number\">2 / 2</span>"));
}

#[test]
fn test_html_command_link_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, DECK).expect("Failed to write markdown file");
    let output_path = temp_path.join("deck.html");

    let output = run_command(&[
        "html",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--js",
        "nav.js",
        "--mode",
        "link",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html.contains(r#"<script src="nav.js"></script>"#));
}

#[test]
fn test_build_command_renders_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    fs::create_dir_all(root.join("talks")).expect("Failed to create talks dir");
    fs::create_dir_all(root.join("styles")).expect("Failed to create styles dir");
    fs::write(root.join("talks/intro.md"), DECK).expect("Failed to write intro");
    fs::write(root.join("talks/outro.mdx"), "# Bye\n").expect("Failed to write outro");
    fs::write(root.join("talks/notes.txt"), "ignored").expect("Failed to write notes");
    fs::write(root.join("styles/custom.css"), "h1 { color: teal; }").expect("Failed to write css");
    fs::write(
        root.join("slidemark.config.json"),
        r#"{ "theme": "uncover", "presentations": "./talks", "output": "./site", "customStyles": "./styles/custom.css" }"#,
    )
    .expect("Failed to write config");

    let config_path = root.join("slidemark.config.json");
    let output = run_command(&["build", "-c", config_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let intro = fs::read_to_string(root.join("site/intro.html")).expect("intro built");
    let outro = fs::read_to_string(root.join("site/outro.html")).expect("outro built");
    assert!(!root.join("site/notes.html").exists());

    assert!(intro.contains("<style>h1 { color: teal; }</style>"));
    assert!(outro.contains("<body data-theme=\"uncover\">"));
    assert!(outro.contains("<h1>Bye</h1>"));
}

#[test]
fn test_build_command_without_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("slidemark.config.json");

    let output = run_command(&["build", "-c", config_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}
