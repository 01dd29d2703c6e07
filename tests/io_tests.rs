use sectionmark::config::Config;
use sectionmark::io::{self, IoError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn convert_file_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir
        .path()
        .join(io::force_suffix(Path::new("README"), "md"));
    let destination = temp_dir
        .path()
        .join(io::force_suffix(Path::new("out/readme-to"), "html"));
    fs::write(&source, "# Notes\n- one\n- two\n- three\n").unwrap();

    let markdown = io::read_source(&source).unwrap();
    io::write_output(&destination, &sectionmark::convert(&markdown, "Notes")).unwrap();

    assert!(destination.ends_with("out/readme-to.html"));
    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Notes</title></head><body>\
         <section><h1>Notes</h1><br><p>\n<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li></ul><br>\n</p></section>\
         </body></html>"
    );
}

#[test]
fn missing_source_is_reported() {
    let err = io::read_source(Path::new("/this/path/does/not/exist.md")).unwrap_err();
    assert!(matches!(err, IoError::NotFound(_)));
    assert_eq!(err.to_string(), "File not found: /this/path/does/not/exist.md");
}

#[test]
fn config_drives_title_and_paths() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("sectionmark.toml");
    fs::write(
        &config_file,
        "source = \"docs/guide\"\ndestination = \"-\"\ntitle = \"Guide\"\n",
    )
    .unwrap();

    let config = Config::load_from_path(&config_file).unwrap().unwrap();
    let source = io::force_suffix(config.source.as_deref().unwrap(), "md");
    let destination = io::force_suffix(config.destination.as_deref().unwrap(), "html");

    assert_eq!(source, Path::new("docs/guide.md"));
    assert_eq!(destination, Path::new("-"));
    assert_eq!(config.title(), "Guide");
}
