//! Hygiene — enforces coding standards at test time.
//!
//! Scans the engine's production sources for antipatterns. Every pattern has
//! a budget of zero; the budget never grows.

use std::fs;
use std::path::Path;

/// (pattern, what it costs us)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics in production code"),
    (".expect(", "panics in production code"),
    ("panic!(", "panics in production code"),
    ("unreachable!(", "panics in production code"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path_str, content));
            }
        }
    }
}

#[test]
fn production_code_stays_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (pattern, why) in BANNED {
        for (path, content) in &files {
            for (idx, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!("{path}:{} `{pattern}` — {why}", idx + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "hygiene violations (budget is zero):\n{}",
        violations.join("\n")
    );
}
