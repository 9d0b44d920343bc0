use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

/// Stylesheets pulled in by `@import "..."` lines of the entry file
fn imported_stylesheets(entry: &Path) -> Vec<PathBuf> {
    let source = fs::read_to_string(entry).expect("Failed to read header CSS entry");
    let base = entry.parent().unwrap_or_else(|| Path::new("."));

    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("@import"))
        .filter_map(|rest| rest.split('"').nth(1))
        .map(|relative| base.join(relative))
        .collect()
}

fn main() {
    let entry = Path::new(ENTRY);
    println!("cargo:rerun-if-changed={}", ENTRY);

    // A missing partial would otherwise surface as an opaque bundler error
    for import in imported_stylesheets(entry) {
        assert!(import.exists(), "Imported stylesheet missing: {}", import.display());
        println!("cargo:rerun-if-changed={}", import.display());
    }

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .expect("Failed to bundle header CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify header CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(OUTPUT, css.code).expect("Failed to write bundle.css");
}
