use super::*;

fn contents(lines: &[Line<'_>]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_split_to_lines_short_text() {
    let lines = split_to_lines("Run 5k", 20);
    assert_eq!(contents(&lines), vec!["Run 5k"]);
}

#[test]
fn test_split_to_lines_wraps_on_word_boundary() {
    let lines = split_to_lines("read one chapter every single night", 12);
    let contents = contents(&lines);
    assert!(contents.len() > 1);
    for line in &contents {
        assert!(line.len() <= 12, "line too wide: {:?}", line);
    }
    assert_eq!(contents.join(" "), "read one chapter every single night");
}

#[test]
fn test_split_to_lines_overlong_word_kept_whole() {
    let lines = split_to_lines("supercalifragilistic", 5);
    assert_eq!(contents(&lines), vec!["supercalifragilistic"]);
}

#[test]
fn test_split_to_lines_empty_text() {
    assert!(split_to_lines("", 10).is_empty());
}
