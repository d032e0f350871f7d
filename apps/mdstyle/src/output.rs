//! Output rendering for report and fix runs.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file issues and a top-level summary.

use crate::models::LintResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a run result in the requested format. `target` is the path the
/// user passed, echoed in the fix-mode summary.
pub fn print_lint(res: &LintResult, output: &str, target: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res)).unwrap()
        ),
        _ if res.fix => print_fix_human(res, target, use_colors(output)),
        _ => print_report_human(res, use_colors(output)),
    }
}

fn print_report_human(res: &LintResult, color: bool) {
    for r in &res.files {
        if color {
            println!("\n{} {}:", "❌".red(), r.file.bold());
        } else {
            println!("\n❌ {}:", r.file);
        }
        for is in &r.issues {
            println!("   {}", is);
        }
    }
    let s = &res.summary;
    if color {
        println!("\n{}", "📊 Validation Summary:".bold());
    } else {
        println!("\n📊 Validation Summary:");
    }
    println!("   Files with issues: {}", s.files_with_issues);
    println!("   Total issues found: {}", s.issues);
    if s.issues > 0 {
        println!("\n💡 Run with --fix to automatically resolve these issues");
    } else if color {
        println!("{}", "✅ All markdown files are properly formatted!".green());
    } else {
        println!("✅ All markdown files are properly formatted!");
    }
}

fn print_fix_human(res: &LintResult, target: &str, color: bool) {
    let mut remaining = 0usize;
    for r in &res.files {
        if r.wrote {
            let line = format!("✅ Fixed {} issues in {}", r.fixed, r.file);
            if color {
                println!("{}", line.green());
            } else {
                println!("{}", line);
            }
        }
        let left: Vec<_> = r.remaining().collect();
        if !left.is_empty() {
            remaining += left.len();
            if color {
                println!("{} {}:", "▲".yellow(), r.file.bold());
            } else {
                println!("▲ {}:", r.file);
            }
            for is in left {
                println!("   {}", is);
            }
        }
    }
    let files_fixed = res.files.iter().filter(|r| r.wrote).count();
    println!("\n🔧 Fix mode: Processed files in {}", target);
    if res.summary.fixed > 0 {
        let line = format!(
            "✅ Fixed {} issues across {} files",
            res.summary.fixed, files_fixed
        );
        if color {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    } else {
        println!("✅ No issues found to fix");
    }
    if remaining > 0 {
        println!("   {} issues need manual attention", remaining);
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    // Directly serialize LintResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
