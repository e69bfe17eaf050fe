//! MovieHub Style Consistency Enforcement
//!
//! Walks every workspace crate and fails on structural problems: oversized
//! modules, catch-all module names, emojis in source and panicking
//! shortcuts in production code.

use std::fs;
use std::path::{Path, PathBuf};

/// Module size limit
const MAX_MODULE_LINES: usize = 500;

/// Anti-pattern module names
const BANNED_MODULE_NAMES: &[&str] = &[
    "utils", "util", "helpers", "helper", "common", "shared", "misc", "tools",
];

/// Calls that panic instead of propagating errors
const PANICKING_CALLS: &[&str] = &[".unwrap()", ".expect("];

#[derive(Debug, Clone)]
struct StyleViolation {
    file: String,
    line: usize,
    rule: &'static str,
    message: String,
}

#[derive(Default)]
struct StyleChecker {
    violations: Vec<StyleViolation>,
}

impl StyleChecker {
    fn check_file(&mut self, file_path: &Path) -> Result<(), std::io::Error> {
        let content = fs::read_to_string(file_path)?;
        let lines: Vec<&str> = content.lines().collect();

        self.check_module_size(file_path, &lines);
        self.check_banned_module_name(file_path);
        self.check_emoji_usage(file_path, &lines);
        if !is_test_source(file_path) {
            self.check_panicking_calls(file_path, &lines);
        }

        Ok(())
    }

    fn add_violation(&mut self, file: &Path, line: usize, rule: &'static str, message: String) {
        self.violations.push(StyleViolation {
            file: file.display().to_string(),
            line,
            rule,
            message,
        });
    }

    fn check_module_size(&mut self, file: &Path, lines: &[&str]) {
        if lines.len() > MAX_MODULE_LINES {
            self.add_violation(
                file,
                lines.len(),
                "MODULE_SIZE_LIMIT",
                format!("{} lines exceeds the {MAX_MODULE_LINES} line limit", lines.len()),
            );
        }
    }

    fn check_banned_module_name(&mut self, file: &Path) {
        let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if BANNED_MODULE_NAMES.contains(&stem) {
            self.add_violation(
                file,
                1,
                "BANNED_MODULE_NAME",
                format!("'{stem}' says nothing about what the module does"),
            );
        }
    }

    fn check_emoji_usage(&mut self, file: &Path, lines: &[&str]) {
        for (index, line) in lines.iter().enumerate() {
            if line.chars().any(is_emoji) {
                self.add_violation(file, index + 1, "NO_EMOJIS", "emoji in source".to_string());
            }
        }
    }

    /// Only the code above the first `#[cfg(test)]` is production code.
    fn check_panicking_calls(&mut self, file: &Path, lines: &[&str]) {
        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            if let Some(call) = PANICKING_CALLS.iter().find(|call| line.contains(*call)) {
                self.add_violation(
                    file,
                    index + 1,
                    "PANIC_IN_PRODUCTION",
                    format!("`{call}` in production code; propagate the error instead"),
                );
            }
        }
    }
}

fn is_emoji(c: char) -> bool {
    matches!(c as u32, 0x1F300..=0x1FAFF | 0x2600..=0x27BF)
}

fn is_test_source(file: &Path) -> bool {
    file.components().any(|part| part.as_os_str() == "tests")
        || file.file_stem().is_some_and(|stem| stem == "test_mocks")
}

/// Collect all Rust source files in the workspace
fn collect_workspace_files() -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut files = Vec::new();

    for crate_name in &[
        "moviehub-core",
        "moviehub-search",
        "moviehub-web",
        "moviehub-cli",
    ] {
        for dir_name in &["src", "tests"] {
            let dir_path = root.join(crate_name).join(dir_name);
            if dir_path.exists() {
                collect_rust_files_in_dir(&dir_path, &mut files);
            }
        }
    }

    files
}

fn collect_rust_files_in_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            } else if path.is_dir() {
                collect_rust_files_in_dir(&path, files);
            }
        }
    }
}

#[test]
fn enforce_moviehub_style_consistency() {
    let mut checker = StyleChecker::default();
    let files = collect_workspace_files();
    assert!(!files.is_empty(), "no workspace sources found");

    for file_path in &files {
        if let Err(e) = checker.check_file(file_path) {
            eprintln!("Failed to check {}: {}", file_path.display(), e);
        }
    }

    for violation in &checker.violations {
        println!(
            "CRITICAL [{}] {}:{} - {}",
            violation.rule, violation.file, violation.line, violation.message
        );
    }

    println!("\n--- MovieHub Style Consistency Summary ---");
    println!("Files analyzed: {}", files.len());
    println!("Violations: {}", checker.violations.len());

    assert!(
        checker.violations.is_empty(),
        "Found {} style violations that must be fixed",
        checker.violations.len()
    );
}

#[test]
fn test_panicking_calls_below_test_module_are_allowed() {
    let mut checker = StyleChecker::default();
    let lines = [
        "/// let x = y.unwrap();",
        "fn run() -> Option<u8> { Some(1) }",
        "#[cfg(test)]",
        "mod tests { fn t() { run().unwrap(); } }",
    ];
    checker.check_panicking_calls(Path::new("src/lib.rs"), &lines);
    assert!(checker.violations.is_empty());

    checker.check_panicking_calls(Path::new("src/lib.rs"), &["let v = run().expect(\"v\");"]);
    assert_eq!(checker.violations.len(), 1);
    assert_eq!(checker.violations[0].rule, "PANIC_IN_PRODUCTION");
}
