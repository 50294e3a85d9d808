use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(catalog: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_book-catalog"))
        .arg("--catalog")
        .arg(catalog)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn add_list_toggle_remove() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("library.json");

    let output = run(&catalog, &["add", "Dune", "Frank Herbert", "1965"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("with id 1"));

    let output = run(&catalog, &["add", "Foundation", "Isaac Asimov", "1951"]);
    assert!(output.status.success());

    let output = run(&catalog, &["toggle", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("checked_out"));

    let output = run(&catalog, &["remove", "1"]);
    assert!(output.status.success());

    let output = run(&catalog, &["list"]);
    let listing = stdout(&output);
    assert!(!listing.contains("Dune"));
    assert!(listing.contains("1. ID: 2, Title: Foundation"));

    let output = run(&catalog, &["find", "--author", "Isaac Asimov"]);
    assert!(stdout(&output).contains("Foundation"));
}

#[test]
fn list_of_missing_file_is_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir.path().join("new.json"), &["list"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(book_catalog::EMPTY_CATALOG));
}

#[test]
fn numeric_author_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("library.json");
    let output = run(&catalog, &["add", "Numbers", "1234", "2000"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("digits"));
    assert!(!catalog.exists());
}

#[test]
fn negative_year_is_accepted() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("library.txt");
    let output = run(&catalog, &["add", "Gilgamesh", "Unknown", "-2100"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&catalog).unwrap(),
        "2\n1|Gilgamesh|Unknown|-2100|available\n"
    );
}

#[test]
fn convert_writes_the_other_format() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("library.json");
    let dest = dir.path().join("library.txt");

    run(&catalog, &["add", "Emma", "Jane Austen", "1815"]);
    let output = run(&catalog, &["convert", dest.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "2\n1|Emma|Jane Austen|1815|available\n"
    );
}
