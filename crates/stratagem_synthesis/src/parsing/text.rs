//! Line and fence handling shared by every parser.

/// Removes a markdown code fence around the answer.
///
/// The content of the first fenced block replaces the text; a language tag on
/// the opening fence is skipped. A fence that is never closed keeps everything
/// after it, which is what a truncated answer looks like. Text without a fence
/// is only trimmed.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::strip_fences;
///
/// assert_eq!(strip_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_fences("Voici :\n```\n- A\n- B\n```\nBonne lecture"), "- A\n- B");
/// assert_eq!(strip_fences("  - A  "), "- A");
/// ```
pub fn strip_fences(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text.trim();
    };
    let content_start = start + 3;
    // Skip the rest of the opening line (language tag)
    let skip_to = text[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(text.len());

    match text[skip_to..].find("```") {
        Some(end) => text[skip_to..skip_to + end].trim(),
        None => text[skip_to..].trim(),
    }
}

/// Strips a list marker from `line`.
///
/// Markers are `-`, `*`, `+`, `•`, or a number followed by `.` or `)`, each
/// followed by whitespace or the end of the line. Returns the trimmed remainder,
/// or `None` if the line carries no marker.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::strip_list_prefix;
///
/// assert_eq!(strip_list_prefix("- A"), Some("A"));
/// assert_eq!(strip_list_prefix("  12. Twelve"), Some("Twelve"));
/// assert_eq!(strip_list_prefix("3) Three"), Some("Three"));
/// assert_eq!(strip_list_prefix("**Bold**"), None);
/// assert_eq!(strip_list_prefix("2025-03-01: Kick-off"), None);
/// ```
pub fn strip_list_prefix(line: &str) -> Option<&str> {
    let line = line.trim();
    let rest = if let Some(rest) = line.strip_prefix(['-', '*', '+', '•']) {
        rest
    } else {
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(['.', ')'])?
    };

    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Records of a list-shaped answer, one per line.
///
/// Fences are stripped and blank lines ignored. If any line carries a list
/// marker, only marked lines count and unmarked lines (preambles, closing
/// remarks) are dropped; otherwise every line is a record. Empty remainders are
/// dropped.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::list_items;
///
/// assert_eq!(list_items("Voici :\n- A\n\n- B\n-\n"), vec!["A", "B"]);
/// assert_eq!(list_items("A\nB"), vec!["A", "B"]);
/// assert!(list_items("   \n").is_empty());
/// ```
pub fn list_items(text: &str) -> Vec<&str> {
    let lines: Vec<(&str, Option<&str>)> = strip_fences(text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| (line, strip_list_prefix(line)))
        .collect();

    let any_marked = lines.iter().any(|(_, marked)| marked.is_some());
    lines
        .into_iter()
        .filter_map(|(line, marked)| if any_marked { marked } else { Some(line) })
        .filter(|item| !item.is_empty())
        .collect()
}
