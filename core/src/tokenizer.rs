use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").expect("valid regex");
}

/// Tokenize text into lowercase word tokens: punctuation and digit runs are
/// rewritten to spaces, the remainder is lowercased and split on whitespace.
/// Underscores survive (they are word characters); a digit run inside a word
/// splits it in two. No stemming, no stopword removal.
pub fn tokenize(text: &str) -> Vec<String> {
    let depunctuated = NON_WORD_RE.replace_all(text, " ");
    let dedigited = DIGITS_RE.replace_all(&depunctuated, " ");
    dedigited
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The cat, the hat.");
        assert_eq!(t, vec!["the", "cat", "the", "hat"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }
}
