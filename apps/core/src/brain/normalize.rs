/// Collapses whitespace runs to a single space, trims, lowercases and folds
/// typographic apostrophes to `'`.
///
/// Every matcher in the brain works on this form; the raw text is what gets stored.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(['\u{2018}', '\u{2019}'], "'")
}
