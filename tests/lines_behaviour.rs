use exitcheck::verdict::split_lines;
use proptest::prelude::*;

#[test]
fn splits_on_both_terminators() {
    assert_eq!(split_lines("0\n0\rexit"), vec!["0", "0", "exit"]);
}

#[test]
fn drops_empty_segments() {
    assert_eq!(split_lines("\n\r0\n\n0\r\n"), vec!["0", "0"]);
}

#[test]
fn empty_input_yields_no_lines() {
    assert!(split_lines("").is_empty());
    assert!(split_lines("\r\n\r\n").is_empty());
}

#[test]
fn text_without_trailing_terminator_is_kept() {
    assert_eq!(split_lines("7\nexit"), vec!["7", "exit"]);
}

proptest! {
    #[test]
    fn never_yields_empty_lines(text in "[a-z0-9\\r\\n]{0,64}") {
        for line in split_lines(&text) {
            prop_assert!(!line.is_empty());
        }
    }

    #[test]
    fn delimiter_choice_does_not_change_lines(
        lines in proptest::collection::vec("[a-z0-9]{1,8}", 0..8),
        use_cr in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let mut mixed = String::new();
        for (i, line) in lines.iter().enumerate() {
            mixed.push_str(line);
            mixed.push(if use_cr[i] { '\r' } else { '\n' });
        }
        let newline_only = lines.join("\n");

        prop_assert_eq!(split_lines(&mixed), split_lines(&newline_only));
    }
}
