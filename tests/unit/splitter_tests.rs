// Text splitter unit tests

use memegen::caption::split;
use rstest::rstest;

#[rstest]
#[case("hello world", vec!["hello", "world"])]
#[case("a bb ccc dddd", vec!["a bb", "ccc dddd"])]
#[case("one two three four five", vec!["one two three", "four five"])]
#[case("supercalifragilistic", vec!["supercalifragilistic"])]
#[case("", vec![""])]
fn test_split_near_middle(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split(text), expected);
}

#[test]
fn test_split_preserves_words() {
    let text = "the quick brown fox jumps over the lazy dog";
    let lines = split(text);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.join(" "), text);
    assert!(lines.iter().all(|line| !line.is_empty()));
}

#[test]
fn test_edge_spaces_are_not_split_points() {
    assert_eq!(split(" leading"), vec![" leading"]);
    assert_eq!(split("trailing "), vec!["trailing "]);
}
