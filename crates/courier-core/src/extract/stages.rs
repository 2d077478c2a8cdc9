//! Heuristic stages of the extractor. Each stage is a pure function from a
//! slice of line context to an optional field value; the passes in the parent
//! module decide the order they run in.

use super::pattern::{
    remove_phones, strip_labels, trim_leading_separators, trim_trailing_separators, SEPARATORS,
};

/// Name candidate from the text in front of a phone match.
pub fn name_before(prefix: &str) -> String {
    trim_trailing_separators(&strip_labels(prefix)).to_string()
}

/// Location candidate from the text after a phone match.
pub fn location_after(suffix: &str) -> String {
    trim_leading_separators(&strip_labels(suffix)).to_string()
}

/// Walks the lines above `index`, nearest first, and returns the first one
/// that still has text once phones and labels are removed.
pub fn lookback_name(lines: &[&str], index: usize) -> Option<String> {
    lines[..index.min(lines.len())]
        .iter()
        .rev()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .find_map(|line| {
            let without_phones = remove_phones(line);
            non_empty(name_before(&without_phones))
        })
}

/// Scans at most `limit` non-blank lines below `index` for a location.
pub fn lookahead_location(lines: &[&str], index: usize, limit: usize) -> Option<String> {
    lines
        .iter()
        .skip(index + 1)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(limit)
        .find_map(|line| {
            let without_phones = remove_phones(line);
            non_empty(location_after(&without_phones))
        })
}

/// Splits a line with its phone cut out into separator-delimited pieces.
pub fn split_line(prefix: &str, suffix: &str) -> Vec<String> {
    let joined = format!("{prefix} {suffix}");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_labels(&collapsed)
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn sanitize_name(value: &str) -> String {
    keep_chars(value, &['.', '\'', '-'])
}

pub fn sanitize_location(value: &str) -> String {
    keep_chars(value, &['.', ',', '\'', '(', ')', '-'])
}

/// Name and location from the words around a match in the whole-text pass.
/// `before` and `after` are the already-clipped window halves.
pub fn window_candidates(
    before: &str,
    after: &str,
    name_words: usize,
    location_words: usize,
) -> (String, String) {
    let words: Vec<&str> = before.split_whitespace().chain(after.split_whitespace()).collect();
    let name_end = name_words.min(words.len());
    let location_start = words.len().saturating_sub(location_words);
    let name = strip_labels(&words[..name_end].join(" "));
    let location = strip_labels(&words[location_start..].join(" "));
    (name, location)
}

/// Byte range of the text within `chars` characters either side of
/// `start..end`, clamped to the text and to char boundaries.
pub fn window_bounds(text: &str, start: usize, end: usize, chars: usize) -> (usize, usize) {
    let window_start = match chars.checked_sub(1) {
        Some(back) => text[..start]
            .char_indices()
            .rev()
            .nth(back)
            .map_or(0, |(index, _)| index),
        None => start,
    };
    let window_end = text[end..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| end + index);
    (window_start, window_end)
}

fn keep_chars(value: &str, extra: &[char]) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace() || extra.contains(ch))
        .collect::<String>()
        .trim()
        .to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_before_strips_labels_and_trailing_separators() {
        assert_eq!(name_before("Customer: Ravi Kumar -"), "Ravi Kumar");
        assert_eq!(name_before("Ravi |,"), "Ravi");
        assert_eq!(name_before("Phone: "), "");
    }

    #[test]
    fn location_after_strips_labels_and_leading_separators() {
        assert_eq!(location_after(" - Near City Mall"), "Near City Mall");
        assert_eq!(location_after(" Address: MG Road"), "MG Road");
        assert_eq!(location_after(""), "");
    }

    #[test]
    fn lookback_takes_nearest_line_with_text() {
        let lines = ["Alpha", "Beta", "", "9876543210 Road"];
        assert_eq!(lookback_name(&lines, 3).as_deref(), Some("Beta"));
    }

    #[test]
    fn lookback_skips_phone_only_and_label_only_lines() {
        let lines = ["Name: Alpha", "Name:", "9123456780", "", "9876543210"];
        assert_eq!(lookback_name(&lines, 4).as_deref(), Some("Alpha"));
    }

    #[test]
    fn lookback_has_nothing_above_first_line() {
        let lines = ["9876543210"];
        assert_eq!(lookback_name(&lines, 0), None);
    }

    #[test]
    fn lookahead_takes_first_line_with_text() {
        let lines = ["9876543210", "", "Address: MG Road", "Park Street"];
        assert_eq!(
            lookahead_location(&lines, 0, 3).as_deref(),
            Some("MG Road")
        );
    }

    #[test]
    fn lookahead_counts_only_non_blank_lines() {
        let lines = ["9876543210", "Address:", "", "", "Loc:", "City:", "Far Road"];
        assert_eq!(lookahead_location(&lines, 0, 3), None);
        assert_eq!(
            lookahead_location(&lines, 0, 4).as_deref(),
            Some("Far Road")
        );
    }

    #[test]
    fn split_line_breaks_on_separators() {
        assert_eq!(
            split_line("Ravi -", "| Park Street, Block 4"),
            vec!["Ravi", "Park Street", "Block 4"]
        );
        assert_eq!(split_line("Name:", ""), Vec::<String>::new());
    }

    #[test]
    fn sanitize_name_keeps_name_characters() {
        assert_eq!(sanitize_name("O'Brien, J. (Jr) #1"), "O'Brien J. Jr 1");
        assert_eq!(sanitize_name("Ana-María"), "Ana-María");
    }

    #[test]
    fn sanitize_location_keeps_address_characters() {
        assert_eq!(
            sanitize_location("Flat #4, MG Road (near park)!"),
            "Flat 4, MG Road (near park)"
        );
    }

    #[test]
    fn window_candidates_take_leading_and_trailing_words() {
        let (name, location) =
            window_candidates("Call Ravi Kumar at ", " near the old bus stand", 4, 6);
        assert_eq!(name, "Call Ravi Kumar at");
        assert_eq!(location, "at near the old bus stand");
    }

    #[test]
    fn window_candidates_handle_short_windows() {
        let (name, location) = window_candidates("", " Ravi", 4, 6);
        assert_eq!(name, "Ravi");
        assert_eq!(location, "Ravi");
        let (name, location) = window_candidates("", "", 4, 6);
        assert!(name.is_empty());
        assert!(location.is_empty());
    }

    #[test]
    fn window_bounds_clamp_to_text() {
        let text = "abcdefghij";
        assert_eq!(window_bounds(text, 4, 6, 2), (2, 8));
        assert_eq!(window_bounds(text, 1, 9, 5), (0, 10));
        assert_eq!(window_bounds(text, 4, 6, 0), (4, 6));
    }

    #[test]
    fn window_bounds_respect_char_boundaries() {
        let text = "ééé 9876543210 ééé";
        let start = text.find('9').unwrap();
        let end = start + "9876543210".len();
        let (window_start, window_end) = window_bounds(text, start, end, 2);
        assert_eq!(&text[window_start..start], "é ");
        assert_eq!(&text[end..window_end], " é");
    }
}
