use super::normalizer::SentenceUnit;

/// A single word unit. May be empty until stopword filtering removes it.
pub type Token = String;

/// Splits a normalized sentence on the single space the normalizer emits.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    sentence.split(' ').map(String::from).collect()
}

/// Tokenizes every unit, one token sequence per unit, in order.
pub fn tokenize_all(units: &[SentenceUnit]) -> Vec<Vec<Token>> {
    units.iter().map(|unit| tokenize(unit)).collect()
}
