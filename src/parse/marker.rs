use crate::model::Status;

/// Recognized checkbox prefixes, in priority order. The first entry that
/// matches at the start of a line decides the status.
const MARKERS: &[(&str, Status)] = &[
    ("[ ]", Status::Open),
    ("[x]", Status::Checked),
    ("[X]", Status::Checked),
    ("[@]", Status::Ongoing),
    ("[~]", Status::Obsolete),
    ("[-]", Status::Obsolete),
];

/// List bullets that may precede a marker (`- [ ] task`)
const BULLETS: &[char] = &['-', '*', '+'];

/// Find the marker at the start of `line`, skipping indentation and one list
/// bullet. Returns the status and the byte offset where the task text begins.
pub fn split_marker(line: &str) -> Option<(Status, usize)> {
    let indent = line.len() - line.trim_start().len();
    let mut start = indent;
    let content = &line[start..];

    if let Some(c) = content.chars().next()
        && BULLETS.contains(&c)
        && content[1..].starts_with(' ')
    {
        let after = &content[1..];
        start += 1 + (after.len() - after.trim_start().len());
    }

    let content = &line[start..];
    for (prefix, status) in MARKERS {
        if let Some(rest) = content.strip_prefix(prefix)
            && (rest.is_empty() || rest.starts_with(char::is_whitespace))
        {
            return Some((*status, start + prefix.len()));
        }
    }
    None
}

/// Whether a line is a task line at all
pub fn is_marker_line(line: &str) -> bool {
    split_marker(line).is_some()
}

/// Whitespace-separated tokens starting with `#`. A bare `#` is not a tag.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.len() > 1 && word.starts_with('#'))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_markers() {
        for (line, expected) in [
            ("[ ] a", Status::Open),
            ("[x] a", Status::Checked),
            ("[X] a", Status::Checked),
            ("[@] a", Status::Ongoing),
            ("[~] a", Status::Obsolete),
            ("[-] a", Status::Obsolete),
        ] {
            assert_eq!(split_marker(line), Some((expected, 3)), "line {:?}", line);
        }
    }

    #[test]
    fn test_marker_with_indent_and_bullet() {
        assert_eq!(split_marker("  - [x] nested"), Some((Status::Checked, 7)));
        assert_eq!(split_marker("* [@] star"), Some((Status::Ongoing, 5)));
        assert_eq!(split_marker("\t+  [ ] plus"), Some((Status::Open, 7)));
    }

    #[test]
    fn test_marker_at_end_of_line() {
        assert_eq!(split_marker("[ ]"), Some((Status::Open, 3)));
    }

    #[test]
    fn test_marker_must_be_followed_by_space() {
        assert_eq!(split_marker("[x]y"), None);
        assert_eq!(split_marker("[ ]text"), None);
    }

    #[test]
    fn test_not_a_marker() {
        assert!(!is_marker_line("some text [ ] later"));
        assert!(!is_marker_line("- plain bullet"));
        assert!(!is_marker_line("-[ ] no space after bullet"));
        assert!(!is_marker_line("[ x] wrong"));
        assert!(!is_marker_line(""));
    }

    #[test]
    fn test_first_marker_wins() {
        // Only the leading marker counts; later ones are text
        let (status, start) = split_marker("[x] [ ] both").unwrap();
        assert_eq!(status, Status::Checked);
        assert_eq!(&"[x] [ ] both"[start..], " [ ] both");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("fix #bug in #core-io"), vec!["#bug", "#core-io"]);
        assert_eq!(parse_tags("no tags here"), Vec::<String>::new());
        assert_eq!(parse_tags("lone # is not a tag"), Vec::<String>::new());
        assert_eq!(parse_tags("#a #a"), vec!["#a", "#a"]);
    }
}
