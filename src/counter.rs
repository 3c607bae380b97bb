use indexmap::IndexMap;

/// Word -> occurrence count, in first-seen order.
pub type Frequencies = IndexMap<String, usize>;

/// Counts words across all sentences. Sentences are tokenized on the literal
/// space character, so runs of spaces (or leading/trailing ones) produce
/// empty tokens and those are counted like any other word.
pub fn word_counts(sentences: &[String]) -> Frequencies {
    let mut result = Frequencies::new();
    for sentence in sentences {
        for word in sentence.split(' ') {
            *result.entry(word.to_string()).or_insert(0) += 1;
        }
    }
    result
}

/// Total number of tokens counted (sum of all frequencies).
pub fn total(frequencies: &Frequencies) -> usize {
    frequencies.values().sum()
}
