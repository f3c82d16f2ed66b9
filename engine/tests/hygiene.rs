//! Hygiene: production sources of the engine stay free of panics and silent discards.
//!
//! Each pattern has a budget of zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "propagate with ? or fall back explicitly" },
    Rule { pattern: ".expect(", budget: 0, why: "propagate with ? or fall back explicitly" },
    Rule { pattern: "panic!(", budget: 0, why: "renderers must never crash the page" },
    Rule { pattern: "unreachable!(", budget: 0, why: "model the case in the type instead" },
    Rule { pattern: "todo!(", budget: 0, why: "no stubs in shipped code" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "no stubs in shipped code" },
    Rule { pattern: "let _ =", budget: 0, why: "inspect the result or log it" },
    Rule { pattern: ".ok()", budget: 0, why: "inspect the error or log it" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code" },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "run from the engine crate root");
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut report = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > rule.budget {
            let listing: Vec<String> = found.iter().map(|(path, n)| format!("    {path}: {n}")).collect();
            report.push(format!(
                "{} found {total}, budget {} ({})\n{}",
                rule.pattern,
                rule.budget,
                rule.why,
                listing.join("\n")
            ));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
