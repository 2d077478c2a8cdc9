use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Optional `+`, a digit, eight or more of digits/space/`-`/`(`/`)`/`.`, then a
/// closing digit run. The middle run is lazy and the closing run greedy, so a
/// match ends with the first digit group that completes it and never swallows
/// a house number or a second phone written after a space.
pub(crate) static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9][0-9\s\-().]{8,}?[0-9]+").unwrap());

static NAME_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:name|customer name|customer|cust|full name)[:\-\s]+").unwrap()
});
static PHONE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:phone|mobile|mob|contact|ph)[:\-\s]+").unwrap());
static LOCATION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:address|addr|location|loc|place|city)[:\-\s]+").unwrap()
});

pub(crate) const SEPARATORS: [char; 4] = ['-', '|', ',', ';'];

/// Strips one leading name, phone and location label, in that order.
pub fn strip_labels(text: &str) -> String {
    let text = text.trim();
    let text = NAME_LABEL_RE.replace(text, "");
    let text = PHONE_LABEL_RE.replace(&text, "");
    let text = LOCATION_LABEL_RE.replace(&text, "");
    text.trim().to_string()
}

pub fn remove_phones(text: &str) -> Cow<'_, str> {
    PHONE_RE.replace_all(text, "")
}

pub(crate) fn trim_leading_separators(text: &str) -> &str {
    text.trim_start_matches(SEPARATORS).trim()
}

pub(crate) fn trim_trailing_separators(text: &str) -> &str {
    text.trim_end_matches(SEPARATORS).trim()
}
