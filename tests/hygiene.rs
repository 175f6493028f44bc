//! Hygiene: coding standards enforced at test time.
//!
//! Scans the widget and geometry source trees for patterns that can crash the
//! page or swallow errors. Every budget is zero and stays zero.

use std::fs;
use std::path::PathBuf;

/// Source roots, relative to the package root.
const ROOTS: [&str; 2] = ["src", "geometry/src"];

/// A forbidden pattern and how many lines may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics. These abort the wasm instance.
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    // Errors discarded without inspection.
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

/// Production sources as `(path, content)`, excluding `*_test.rs`.
fn production_sources() -> Vec<(String, String)> {
    let mut pending = ROOTS.iter().map(PathBuf::from).collect::<Vec<_>>();
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            let name = path.to_string_lossy().into_owned();
            if path.is_dir() {
                pending.push(path);
            } else if name.ends_with(".rs") && !name.ends_with("_test.rs") {
                if let Ok(content) = fs::read_to_string(&path) {
                    sources.push((name, content));
                }
            }
        }
    }
    assert!(!sources.is_empty(), "no sources found under {ROOTS:?}");
    sources.sort();
    sources
}

#[test]
fn pattern_budgets_hold() {
    let sources = production_sources();
    let mut report = Vec::new();
    for budget in BUDGETS {
        let hits = sources
            .iter()
            .map(|(path, content)| (path, content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|&(_, n)| n > 0)
            .collect::<Vec<_>>();
        let found = hits.iter().map(|&(_, n)| n).sum::<usize>();
        if found > budget.max {
            report.push(format!("`{}`: found {found}, max {}", budget.pattern, budget.max));
            report.extend(hits.iter().map(|(path, n)| format!("    {path}: {n}")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn every_module_has_a_doc_header() {
    let missing = production_sources()
        .into_iter()
        .filter(|(_, content)| !content.starts_with("//!"))
        .map(|(path, _)| path)
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "modules without a //! header:\n  {}", missing.join("\n  "));
}
