//! Source hygiene checks for the `ksp-site` crate.
//!
//! Feature code runs inside browser callbacks where a panic takes the whole
//! module down with no report, so production sources carry no panicking
//! calls and no silently discarded results. Browser glue stays behind the
//! `hydrate` feature, and listener lifetimes are leaked in one place only.

use std::fs;
use std::path::{Path, PathBuf};

/// Module compiled only with `hydrate` (gated where it is declared).
const BROWSER_GLUE: &str = "src/util/dom.rs";

/// Crates that exist only in `hydrate` builds.
const BROWSER_CRATES: [&str; 4] = ["web_sys", "wasm_bindgen", "js_sys", "gloo_timers"];

/// Patterns that may not appear in production sources at all.
const FORBIDDEN: [(&str, &str); 9] = [
    (".unwrap()", "propagate with `?` or handle the None/Err case"),
    (".expect(", "propagate with `?` or handle the None/Err case"),
    ("panic!(", "return a SiteError instead"),
    ("unreachable!(", "model the case in the type instead"),
    ("todo!(", "finish the implementation"),
    ("unimplemented!(", "finish the implementation"),
    ("let _ =", "log or propagate the discarded value"),
    (".ok()", "match on the error so it is not lost"),
    ("#[allow(dead_code)]", "delete the unused code"),
];

struct Source {
    path: String,
    text: String,
}

impl Source {
    fn is(&self, relative: &str) -> bool {
        self.path.replace('\\', "/").ends_with(relative)
    }
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

fn all_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(&src_dir(), &mut files);
    files.sort();
    files
}

fn is_test_file(path: &Path) -> bool {
    path.file_stem().is_some_and(|stem| stem.to_string_lossy().ends_with("_test"))
}

/// Production sources, without the sibling `_test.rs` files.
fn production_sources() -> Vec<Source> {
    all_files()
        .into_iter()
        .filter(|path| !is_test_file(path))
        .filter_map(|path| {
            let text = fs::read_to_string(&path).ok()?;
            Some(Source { path: path.to_string_lossy().into_owned(), text })
        })
        .collect()
}

fn offending_lines(sources: &[Source], matches: impl Fn(&str) -> bool) -> Vec<String> {
    let mut hits = Vec::new();
    for source in sources {
        for (i, line) in source.text.lines().enumerate() {
            if matches(line) {
                hits.push(format!("  {}:{}: {}", source.path, i + 1, line.trim()));
            }
        }
    }
    hits
}

#[test]
fn production_sources_are_found() {
    let sources = production_sources();
    assert!(sources.iter().any(|s| s.is("src/lib.rs")), "src/lib.rs not scanned");
    assert!(sources.iter().any(|s| s.is("src/boot.rs")), "src/boot.rs not scanned");
}

#[test]
fn no_panicking_or_discarding_calls() {
    let sources = production_sources();
    let mut report = Vec::new();
    for (pattern, advice) in FORBIDDEN {
        let hits = offending_lines(&sources, |line| line.contains(pattern));
        if !hits.is_empty() {
            report.push(format!("`{pattern}` ({advice}):\n{}", hits.join("\n")));
        }
    }
    assert!(report.is_empty(), "forbidden patterns in src/:\n{}", report.join("\n"));
}

#[test]
fn listeners_are_leaked_only_by_the_dom_helpers() {
    let sources: Vec<Source> = production_sources().into_iter().filter(|s| !s.is(BROWSER_GLUE)).collect();
    let hits = offending_lines(&sources, |line| line.contains(".forget()"));
    assert!(
        hits.is_empty(),
        "register listeners and timers through util::dom instead of calling .forget():\n{}",
        hits.join("\n")
    );
}

#[test]
fn browser_imports_are_hydrate_gated() {
    let mut ungated = Vec::new();
    for source in production_sources().iter().filter(|s| !s.is(BROWSER_GLUE)) {
        let lines: Vec<&str> = source.text.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let imports_browser_crate = BROWSER_CRATES
                .iter()
                .any(|krate| line.starts_with(&format!("use {krate}")));
            if !imports_browser_crate {
                continue;
            }
            let gated = i > 0 && lines[i - 1].trim() == r#"#[cfg(feature = "hydrate")]"#;
            if !gated {
                ungated.push(format!("  {}:{}: {line}", source.path, i + 1));
            }
        }
    }
    assert!(
        ungated.is_empty(),
        "top-level browser imports need #[cfg(feature = \"hydrate\")]:\n{}",
        ungated.join("\n")
    );
}

#[test]
fn every_feature_has_sibling_tests() {
    let features = src_dir().join("features");
    let missing: Vec<String> = all_files()
        .into_iter()
        .filter(|path| path.parent() == Some(features.as_path()))
        .filter(|path| !is_test_file(path) && path.file_stem().is_some_and(|stem| stem != "mod"))
        .filter(|path| {
            let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            !features.join(format!("{stem}_test.rs")).exists()
        })
        .map(|path| format!("  {}", path.display()))
        .collect();
    assert!(missing.is_empty(), "feature modules without a _test.rs:\n{}", missing.join("\n"));
}
