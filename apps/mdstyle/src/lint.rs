//! Lint runner: validates one markdown file or every `.md` file under a
//! directory, optionally rewriting them in fix mode.
//!
//! Produces a `LintResult` with per-file reports and a summary. Files are
//! read, checked, and (in fix mode) written back one at a time.

use crate::checks::check_text;
use crate::models::{FileReport, Issue, LintResult, Summary};
use crate::utils::display_relative;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Failure to resolve the lint target itself.
#[derive(Debug, PartialEq, Eq)]
pub enum TargetError {
    /// Neither a file nor a directory.
    InvalidPath(String),
}

impl std::fmt::Display for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetError::InvalidPath(p) => write!(f, "{} is not a valid file or directory", p),
        }
    }
}

/// Validate a single file and, in fix mode, write the corrected text back.
///
/// Read and write failures are reported as one synthetic issue for the file.
pub fn validate_file(path: &Path, fix: bool) -> (Vec<Issue>, bool) {
    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return (vec![Issue::file_error(format!("Error reading file: {}", e))], false),
    };
    let (issues, fixed) = check_text(&data, fix);
    match fixed {
        Some(text) => write_fixed(path, &text, issues),
        None => (issues, false),
    }
}

/// Persist fixed text; a failed write replaces the file's issues with one.
fn write_fixed(path: &Path, text: &str, issues: Vec<Issue>) -> (Vec<Issue>, bool) {
    match fs::write(path, text) {
        Ok(()) => (issues, true),
        Err(e) => (vec![Issue::file_error(format!("Error writing file: {}", e))], false),
    }
}

fn report_for(path: &Path, display: String, fix: bool) -> FileReport {
    let (issues, wrote) = validate_file(path, fix);
    let fixed = if wrote {
        issues.iter().filter(|i| i.fixable).count()
    } else {
        0
    };
    FileReport {
        file: display,
        issues,
        fixed,
        wrote,
    }
}

/// Collect every `*.md` file below `dir`, sorted by path, together with
/// the paths the walk could not read and why.
pub fn markdown_files(dir: &Path) -> (Vec<PathBuf>, Vec<(PathBuf, String)>) {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/**/*.md", base.trim_end_matches('/'));
    let mut targets = Vec::new();
    let mut unreadable = Vec::new();
    match glob(&pattern) {
        Ok(paths) => {
            for entry in paths {
                match entry {
                    Ok(p) if p.is_file() => targets.push(p),
                    Ok(_) => {}
                    Err(e) => unreadable.push((e.path().to_path_buf(), e.error().to_string())),
                }
            }
        }
        Err(e) => unreadable.push((dir.to_path_buf(), e.to_string())),
    }
    targets.sort();
    (targets, unreadable)
}

/// Run the validator over `target`, which may be a file or a directory.
pub fn run_lint(target: &str, fix: bool) -> Result<LintResult, TargetError> {
    let root = PathBuf::from(target);
    let reports: Vec<FileReport> = if root.is_file() {
        vec![report_for(&root, target.to_string(), fix)]
    } else if root.is_dir() {
        let (targets, unreadable) = markdown_files(&root);
        let mut reports: Vec<FileReport> = targets
            .iter()
            .map(|p| report_for(p, display_relative(p, &root), fix))
            .collect();
        // Directories the walk could not enter are reported like unreadable files.
        reports.extend(unreadable.into_iter().map(|(p, err)| FileReport {
            file: display_relative(&p, &root),
            issues: vec![Issue::file_error(format!("Error reading directory: {}", err))],
            fixed: 0,
            wrote: false,
        }));
        reports
    } else {
        return Err(TargetError::InvalidPath(target.to_string()));
    };

    let files = reports.len();
    let with_issues: Vec<FileReport> = reports
        .into_iter()
        .filter(|r| !r.issues.is_empty())
        .collect();
    let summary = Summary {
        files,
        files_with_issues: with_issues.len(),
        issues: with_issues.iter().map(|r| r.issues.len()).sum(),
        fixed: with_issues.iter().map(|r| r.fixed).sum(),
    };
    Ok(LintResult {
        files: with_issues,
        summary,
        fix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_end_to_end_report_then_fix() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("options.md");
        fs::write(&file, "Options:\n- one\n- two\n").unwrap();

        let res = run_lint(file.to_str().unwrap(), false).unwrap();
        assert_eq!(res.summary.issues, 1);
        assert_eq!(res.summary.files_with_issues, 1);
        assert_eq!(
            res.files[0].issues[0].to_string(),
            "Line 1: Missing blank line before list"
        );
        assert_eq!(res.files[0].file, file.to_str().unwrap());
        // report mode never touches the file
        assert_eq!(fs::read_to_string(&file).unwrap(), "Options:\n- one\n- two\n");

        let res = run_lint(file.to_str().unwrap(), true).unwrap();
        assert!(res.files[0].wrote);
        assert_eq!(res.files[0].fixed, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "Options:\n\n- one\n- two\n");

        let res = run_lint(file.to_str().unwrap(), false).unwrap();
        assert_eq!(res.summary.issues, 0);
        assert!(res.files.is_empty());
    }

    #[test]
    fn test_directory_totals_and_relative_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("guide")).unwrap();
        fs::write(root.join("clean.md"), "# Title\n\nBody\n").unwrap();
        fs::write(root.join("a.md"), "Options:\n- one\n").unwrap();
        fs::write(
            root.join("guide").join("b.md"),
            "Opts:\n- x\n\n  - Type: int\n",
        )
        .unwrap();

        let res = run_lint(root.to_str().unwrap(), false).unwrap();
        assert_eq!(res.summary.files, 3);
        assert_eq!(res.summary.files_with_issues, 2);
        assert_eq!(res.summary.issues, 3);
        let names: Vec<&str> = res.files.iter().map(|r| r.file.as_str()).collect();
        let nested = Path::new("guide").join("b.md").to_string_lossy().to_string();
        assert_eq!(names, vec!["a.md", nested.as_str()]);
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("notes.txt"), "Options:\n- one\n").unwrap();
        fs::write(root.join("README.markdown"), "Options:\n- one\n").unwrap();

        let res = run_lint(root.to_str().unwrap(), true).unwrap();
        assert_eq!(res.summary.files, 0);
        assert_eq!(res.summary.issues, 0);
        assert_eq!(
            fs::read_to_string(root.join("notes.txt")).unwrap(),
            "Options:\n- one\n"
        );
    }

    #[test]
    fn test_invalid_target() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = run_lint(missing.to_str().unwrap(), false).unwrap_err();
        assert!(err.to_string().ends_with("is not a valid file or directory"));
    }

    #[test]
    fn test_unreadable_file_becomes_single_issue() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("bad.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        fs::write(root.join("good.md"), "Options:\n- one\n").unwrap();

        let res = run_lint(root.to_str().unwrap(), false).unwrap();
        assert_eq!(res.summary.files_with_issues, 2);
        let bad = res.files.iter().find(|r| r.file == "bad.md").unwrap();
        assert_eq!(bad.issues.len(), 1);
        assert!(bad.issues[0].line.is_none());
        assert!(bad.issues[0].message.starts_with("Error reading file:"));
    }

    #[test]
    fn test_failed_write_becomes_single_issue() {
        let dir = tempdir().unwrap();
        // A directory path can be neither written nor truncated.
        let target = dir.path().join("locked.md");
        fs::create_dir(&target).unwrap();
        let found = vec![Issue::at(1, "Missing blank line before list", true)];

        let (issues, wrote) = write_fixed(&target, "Options:\n\n- one\n", found);
        assert!(!wrote);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].line.is_none());
        assert!(issues[0].message.starts_with("Error writing file:"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_file_does_not_stop_traversal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let root = dir.path();
        let locked = root.join("a.md");
        fs::write(&locked, "Options:\n- one\n").unwrap();
        fs::write(root.join("b.md"), "Options:\n- two\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            // privileged user: permission bits are not enforced
            return;
        }

        let res = run_lint(root.to_str().unwrap(), true).unwrap();
        assert_eq!(res.summary.files_with_issues, 2);
        let a = res.files.iter().find(|r| r.file == "a.md").unwrap();
        assert_eq!(a.issues.len(), 1);
        assert!(a.issues[0].message.starts_with("Error writing file:"));
        assert!(!a.wrote);
        let b = res.files.iter().find(|r| r.file == "b.md").unwrap();
        assert!(b.wrote);
        assert_eq!(
            fs::read_to_string(root.join("b.md")).unwrap(),
            "Options:\n\n- two\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let root = dir.path();
        let sealed = root.join("sealed");
        fs::create_dir(&sealed).unwrap();
        fs::write(sealed.join("hidden.md"), "Options:\n- one\n").unwrap();
        fs::write(root.join("open.md"), "# ok\n").unwrap();
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o000)).unwrap();
        let enforced = fs::read_dir(&sealed).is_err();

        let res = run_lint(root.to_str().unwrap(), false);
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }
        let res = res.unwrap();
        let report = res.files.iter().find(|r| r.file == "sealed").unwrap();
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].message.starts_with("Error reading directory:"));
        assert!(res.files.iter().all(|r| r.file != "open.md"));
    }

    #[test]
    fn test_fix_counts_only_fixable_and_keeps_detection_issues() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("params.md");
        fs::write(
            &file,
            "Settings:\n- a\n\n1. **Mode**:\nFast mode toggle.\n",
        )
        .unwrap();

        let res = run_lint(file.to_str().unwrap(), true).unwrap();
        let report = &res.files[0];
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.fixed, 1);
        assert_eq!(report.remaining().count(), 1);
        assert_eq!(res.summary.fixed, 1);

        // second fix run rewrites nothing
        let before = fs::read_to_string(&file).unwrap();
        let res = run_lint(file.to_str().unwrap(), true).unwrap();
        assert!(!res.files[0].wrote);
        assert_eq!(fs::read_to_string(&file).unwrap(), before);
    }
}
