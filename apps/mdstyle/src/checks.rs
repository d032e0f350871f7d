//! Line-pattern checks for the documentation house style.
//!
//! Checks run in one forward pass over a live line vector. The current line
//! is captured when the loop reaches it; neighbors are read from the vector
//! as it stands, so a fix applied by an earlier check is visible to later
//! ones:
//! - an inserted blank line (missing blank before list) is visited next;
//! - a sub-bullet re-indented from its blank line above (numbered item
//!   spacing) is not reported again when the loop reaches it.
//!
//! Blank lines between a numbered header and its sub-bullets are kept: the
//! missing-blank-before-list check requires one there, so the spacing check
//! resolves by moving the sub-bullet to the 4-space indent instead.
//!
//! Line numbers in issues are positions in the live vector.

use crate::models::Issue;
use regex::Regex;
use std::sync::LazyLock;

pub const MISSING_BLANK_BEFORE_LIST: &str = "Missing blank line before list";
pub const NESTED_BULLET_INDENT: &str =
    "Inconsistent nested bullet indentation (should be 4 spaces)";
pub const NUMBERED_SUB_BULLET_INDENT: &str =
    "Numbered list sub-bullet has wrong indentation (should be 4 spaces)";
pub const EXTRA_BLANK_AFTER_NUMBERED: &str =
    "Extra blank line between numbered item and sub-bullets";
pub const MISSING_PARAM_DETAILS: &str =
    "Configuration parameter may be missing Type/Default/Impact details";

const NESTED_INDENT: &str = "    ";

static DETAIL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Type|Impact|Example|Purpose|Note|Default|Usage|Description):").unwrap()
});

static NUMBERED_BOLD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+\*\*.*\*\*:").unwrap());

/// `<digits>. **<text>**:` after trimming.
pub fn is_numbered_bold_header(line: &str) -> bool {
    NUMBERED_BOLD_HEADER.is_match(line.trim())
}

fn starts_list(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("- ") || t.starts_with("* ")
}

/// Run every check over `lines`. When `fix` is true, fixable patterns are
/// rewritten in place. Returns the issues in detection order and whether
/// the vector was mutated.
pub fn check_lines(lines: &mut Vec<String>, fix: bool) -> (Vec<Issue>, bool) {
    let mut issues = Vec::new();
    let mut modified = false;
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].clone();
        let line_num = i + 1;

        // 1: list directly under a line ending with ':'
        if line.trim().ends_with(':') && i + 1 < lines.len() && starts_list(&lines[i + 1]) {
            issues.push(Issue::at(line_num, MISSING_BLANK_BEFORE_LIST, true));
            if fix {
                lines.insert(i + 1, String::new());
                modified = true;
            }
        }

        // 2: labelled detail bullet indented by two spaces
        if line.starts_with("  - ")
            && !line.starts_with("    - ")
            && DETAIL_LABEL.is_match(&line)
        {
            issues.push(Issue::at(line_num, NESTED_BULLET_INDENT, true));
            if fix {
                lines[i] = format!("{}{}", NESTED_INDENT, &line[2..]);
                modified = true;
            }
        }

        // 2b: three-space sub-bullet under a numbered header two rows up
        if line.starts_with("   - ")
            && !line.starts_with("    - ")
            && i >= 2
            && is_numbered_bold_header(&lines[i - 2])
        {
            issues.push(Issue::at(line_num, NUMBERED_SUB_BULLET_INDENT, true));
            if fix {
                lines[i] = format!("{}{}", NESTED_INDENT, &line[3..]);
                modified = true;
            }
        }

        // 2c: blank line between a numbered header and 3-space sub-bullets
        if line.trim().is_empty()
            && i > 0
            && i + 1 < lines.len()
            && is_numbered_bold_header(&lines[i - 1])
            && lines[i + 1].trim_end().starts_with("   - ")
        {
            issues.push(Issue::at(line_num, EXTRA_BLANK_AFTER_NUMBERED, true));
            if fix {
                let next = lines[i + 1].clone();
                lines[i + 1] = format!("{}{}", NESTED_INDENT, &next[3..]);
                modified = true;
            }
        }

        // 3: detection only
        if is_numbered_bold_header(&line) && i + 1 < lines.len() {
            let next = lines[i + 1].trim_end();
            if !next.starts_with("    - Type:") && !next.trim().is_empty() {
                issues.push(Issue::at(line_num, MISSING_PARAM_DETAILS, false));
            }
        }

        i += 1;
    }
    (issues, modified)
}

/// Split `text` on `\n`, run the checks, and join the result back.
///
/// Returns `Some(new_text)` only when fix mode changed something.
pub fn check_text(text: &str, fix: bool) -> (Vec<Issue>, Option<String>) {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let (issues, modified) = check_lines(&mut lines, fix);
    let fixed = if modified && fix {
        Some(lines.join("\n"))
    } else {
        None
    };
    (issues, fixed)
}
