use unidex_core::tokenizer::tokenize;

#[test]
fn it_strips_punctuation_and_digits() {
    assert_eq!(tokenize("Hello, World! 123"), vec!["hello", "world"]);
}

#[test]
fn it_keeps_underscores_and_splits_on_inner_digits() {
    let toks = tokenize("user_name abc123def don't");
    assert_eq!(toks, vec!["user_name", "abc", "def", "don", "t"]);
}

#[test]
fn it_lowercases_beyond_ascii() {
    let toks = tokenize("Caffè CRÈME");
    assert_eq!(toks, vec!["caffè", "crème"]);
}

#[test]
fn it_is_idempotent_on_its_own_output() {
    let first = tokenize("Hello, World! 123 -- user_name naïve");
    let rejoined = first.join(" ");
    assert_eq!(tokenize(&rejoined), first);
}
