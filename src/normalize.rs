//! The text normalization pipeline.
//!
//! Transforms raw user-entered text into a canonical string according to the
//! rules enabled in [`NormalizationOptions`], then optionally strips all
//! whitespace for counting. Deterministic and total: same input and options
//! always produce the same output, with no failure modes and no I/O.
//!
//! # Whitespace Definition
//!
//! "Whitespace" throughout this module means Unicode `White_Space`
//! (`char::is_whitespace`): ASCII space, tab, newline, carriage return,
//! non-breaking space and the other Unicode space separators.

use std::borrow::Cow;

use crate::options::NormalizationOptions;

/// Characters treated as decorative: they commonly form divider lines
/// (`-----`, `== ==`, `....`) in documents and get special treatment from
/// the collapse and repeat-trim rules.
fn is_decorative(ch: char) -> bool {
    matches!(ch, '-' | '=' | '_' | '*' | '.' | '~')
}

/// Zero-width and invisible code points stripped by `remove_zero_width`.
fn is_zero_width(ch: char) -> bool {
    matches!(
        ch,
        '\u{200B}'..='\u{200F}' | '\u{FEFF}' | '\u{00AD}' | '\u{2060}' | '\u{180E}'
    )
}

/// Normalize `text` according to `options`, then strip all whitespace if
/// `count_spaces` is false.
///
/// Rules apply in a fixed order; the order matters because the rules are not
/// commutative:
///
/// 1. Remove zero-width/invisible characters
/// 2. Tabs to spaces
/// 3. Collapse spaces (decorative gaps first, then whitespace runs)
/// 4. Collapse newlines
/// 5. Trim repeated decorative characters (4+ down to 3)
/// 6. Trim leading/trailing whitespace
/// 7. Strip all whitespace when `count_spaces` is false (measurement only)
///
/// Disabled rules are no-ops.
///
/// # Examples
///
/// ```rust
/// use sheetcount::{normalize, NormalizationOptions};
///
/// let options = NormalizationOptions::default();
/// assert_eq!(normalize("  Hello,  \n world!  ", &options, true), "Hello, world!");
///
/// // countSpaces = false strips whitespace entirely, after all other rules.
/// assert_eq!(normalize("a b c", &NormalizationOptions::disabled(), false), "abc");
/// ```
pub fn normalize(text: &str, options: &NormalizationOptions, count_spaces: bool) -> String {
    // Cow avoids allocating for steps that are disabled or change nothing.
    let mut result: Cow<str> = Cow::Borrowed(text);

    if options.remove_zero_width && result.chars().any(is_zero_width) {
        result = Cow::Owned(result.chars().filter(|ch| !is_zero_width(*ch)).collect());
    }

    if options.tabs_to_spaces && result.contains('\t') {
        result = Cow::Owned(result.replace('\t', " "));
    }

    if options.collapse_spaces {
        result = Cow::Owned(collapse_whitespace_runs(&close_decorative_gaps(&result)));
    }

    if options.collapse_newlines && result.contains(['\r', '\n']) {
        result = Cow::Owned(collapse_newline_runs(&result));
    }

    if options.trim_repeated_chars {
        result = trim_repeated_decoratives(result);
    }

    if options.trim {
        let trimmed = result.trim();
        if trimmed.len() != result.len() {
            result = Cow::Owned(trimmed.to_string());
        }
    }

    if !count_spaces && result.chars().any(char::is_whitespace) {
        result = Cow::Owned(result.chars().filter(|ch| !ch.is_whitespace()).collect());
    }

    result.into_owned()
}

/// First sub-step of `collapse_spaces`: a whitespace run sitting between two
/// decorative characters is closed, leaving the pair adjacent.
///
/// Scans left to right, non-overlapping: the right-hand decorative character
/// is consumed together with the gap and cannot open the next match. So
/// `"- - -"` becomes `"-- -"`, not `"---"`; the second gap has no decorative
/// character left on its left side.
fn close_decorative_gaps(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if is_decorative(ch) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && is_decorative(chars[j]) {
                out.push(ch);
                out.push(chars[j]);
                i = j + 1;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }
    out
}

/// Second sub-step of `collapse_spaces`: every remaining whitespace run
/// (spaces, tabs, newlines) becomes one ASCII space.
///
/// Edges are left alone: a leading or trailing run still collapses to a
/// single space rather than disappearing. Only the `trim` rule removes
/// edge whitespace.
fn collapse_whitespace_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Any run of carriage returns and line feeds becomes a single newline.
fn collapse_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_run {
                out.push('\n');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// A run of 4 or more identical decorative characters collapses to exactly 3.
///
/// Only runs of the *same* character count: `"--=="` stays untouched even
/// though it is four decorative characters in a row.
fn trim_repeated_decoratives(text: Cow<str>) -> Cow<str> {
    let mut needs_work = false;
    let mut run_char = '\0';
    let mut run_len = 0usize;
    for ch in text.chars() {
        if is_decorative(ch) && ch == run_char {
            run_len += 1;
            if run_len >= 4 {
                needs_work = true;
                break;
            }
        } else {
            run_char = ch;
            run_len = 1;
        }
    }
    if !needs_work {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if is_decorative(ch) {
            let mut run = 1usize;
            while chars.peek() == Some(&ch) {
                chars.next();
                run += 1;
            }
            for _ in 0..run.min(3) {
                out.push(ch);
            }
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(update: impl FnOnce(&mut NormalizationOptions)) -> NormalizationOptions {
        let mut options = NormalizationOptions::disabled();
        update(&mut options);
        options
    }

    #[test]
    fn disabled_rules_are_no_ops() {
        let raw = "  a\t\tb \r\n----------  \u{200B}";
        assert_eq!(
            normalize(raw, &NormalizationOptions::disabled(), true),
            raw
        );
    }

    #[test]
    fn removes_zero_width_characters() {
        let options = only(|o| o.remove_zero_width = true);
        let raw = "a\u{200B}b\u{200C}c\u{200D}d\u{200E}e\u{200F}f\u{FEFF}g\u{00AD}h\u{2060}i\u{180E}j";
        assert_eq!(normalize(raw, &options, true), "abcdefghij");
    }

    #[test]
    fn tabs_become_single_spaces() {
        let options = only(|o| o.tabs_to_spaces = true);
        assert_eq!(normalize("a\tb\t\tc", &options, true), "a b  c");
    }

    #[test]
    fn collapses_whitespace_runs_to_one_space() {
        let options = only(|o| o.collapse_spaces = true);
        assert_eq!(normalize("a   b", &options, true), "a b");
        assert_eq!(normalize("a \t\n b", &options, true), "a b");
        // Edge runs collapse but are not removed; that is the trim rule's job.
        assert_eq!(normalize("  a  ", &options, true), " a ");
    }

    #[test]
    fn closes_gap_in_broken_divider_lines() {
        let options = only(|o| o.collapse_spaces = true);
        assert_eq!(normalize("--- ---", &options, true), "------");
        assert_eq!(normalize("---\n---", &options, true), "------");
        assert_eq!(normalize("== ==", &options, true), "====");
    }

    #[test]
    fn decorative_gap_matches_do_not_overlap() {
        // The right-hand character of a closed gap is consumed; alternating
        // single characters leave residual structure.
        let options = only(|o| o.collapse_spaces = true);
        assert_eq!(normalize("- - -", &options, true), "-- -");
    }

    #[test]
    fn collapses_newline_runs_when_spaces_rule_is_off() {
        let options = only(|o| o.collapse_newlines = true);
        assert_eq!(normalize("a\r\n\r\nb", &options, true), "a\nb");
        assert_eq!(normalize("a\n\n\n\nb", &options, true), "a\nb");
        assert_eq!(normalize("a\rb", &options, true), "a\nb");
    }

    #[test]
    fn collapse_spaces_preempts_collapse_newlines() {
        // With both rules on, newlines have already become spaces by the
        // time the newline rule runs. The ordering is part of the contract.
        let options = only(|o| {
            o.collapse_spaces = true;
            o.collapse_newlines = true;
        });
        assert_eq!(normalize("a\n\nb", &options, true), "a b");
    }

    #[test]
    fn trims_repeated_decorative_runs_to_three() {
        let options = only(|o| o.trim_repeated_chars = true);
        assert_eq!(normalize("----------", &options, true), "---");
        assert_eq!(normalize("====", &options, true), "===");
        assert_eq!(normalize("text .....", &options, true), "text ...");
        // Exactly three stays as-is.
        assert_eq!(normalize("---", &options, true), "---");
        // Mixed decoratives are not a run.
        assert_eq!(normalize("--==", &options, true), "--==");
    }

    #[test]
    fn trim_strips_edges_only() {
        let options = only(|o| o.trim = true);
        assert_eq!(normalize("  hi  ", &options, true), "hi");
        assert_eq!(normalize("\n\ta  b\t\n", &options, true), "a  b");
    }

    #[test]
    fn count_spaces_false_strips_all_whitespace_last() {
        assert_eq!(
            normalize("a b c", &NormalizationOptions::disabled(), false),
            "abc"
        );
        // Runs first collapse to one space, then that space is stripped too.
        let options = only(|o| o.collapse_spaces = true);
        assert_eq!(normalize("a   b \n c", &options, false), "abc");
    }

    #[test]
    fn full_pipeline_with_defaults() {
        let options = NormalizationOptions::default();
        assert_eq!(
            normalize("  Hello,\u{200B}  \n world!\t----------  ", &options, true),
            "Hello, world! ---"
        );
    }

    #[test]
    fn normalization_is_idempotent_for_collapse_and_trim_rules() {
        let options = only(|o| {
            o.collapse_spaces = true;
            o.collapse_newlines = true;
            o.trim_repeated_chars = true;
            o.trim = true;
        });
        for raw in [
            "  a   b \r\n\r\n c  ",
            "--- --- ==========",
            "\t\tword\t\t",
            "a .b. c",
            "",
        ] {
            let once = normalize(raw, &options, true);
            let twice = normalize(&once, &options, true);
            assert_eq!(twice, once, "normalize must be idempotent for {raw:?}");
        }
    }
}
