//! Hygiene checks over the scroll crate's production sources.
//!
//! Each antipattern has a budget of zero. The crate runs inside scroll and
//! click handlers, where a panic takes down every widget on the page, and
//! its empty-list and past-the-end cases are ordinary results rather than
//! failures.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`; sibling `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn offenders(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path.display(), n + 1, line.trim()))
        })
        .collect()
}

macro_rules! zero_budget {
    ($name:ident, $pattern:literal) => {
        #[test]
        fn $name() {
            let hits = offenders(&source_files(), $pattern);
            assert!(hits.is_empty(), "`{}` is not allowed in src/:\n{}", $pattern, hits.join("\n"));
        }
    };
}

// Panics.
zero_budget!(no_unwrap, ".unwrap()");
zero_budget!(no_expect, ".expect(");
zero_budget!(no_panic, "panic!(");
zero_budget!(no_unreachable, "unreachable!(");
zero_budget!(no_todo, "todo!(");
zero_budget!(no_unimplemented, "unimplemented!(");

// Silently dropped results.
zero_budget!(no_silent_discard, "let _ =");
zero_budget!(no_dot_ok, ".ok()");

// Structure.
zero_budget!(no_allow_dead_code, "#[allow(dead_code)]");

/// Every module except the crate root and constants carries a sibling test file.
#[test]
fn every_module_has_sibling_tests() {
    let mut missing = Vec::new();
    for file in source_files() {
        let Some(stem) = file.path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        if stem == "lib" || stem == "consts" {
            continue;
        }
        let attr = format!("#[path = \"{stem}_test.rs\"]");
        let sibling = file.path.with_file_name(format!("{stem}_test.rs"));
        if !file.content.contains(&attr) || !sibling.exists() {
            missing.push(file.path.display().to_string());
        }
    }
    assert!(missing.is_empty(), "modules without sibling tests:\n  {}", missing.join("\n  "));
}

#[test]
fn found_sources() {
    assert!(source_files().len() > 10, "hygiene scan must run from the crate root");
}
