use anyhow::{Result, bail};

use crate::counter::Frequencies;

/// Checks a computed frequency table against the gold standard. On mismatch
/// the error message carries a size line plus the words each side has that
/// the other does not, in map iteration order.
pub fn compare(result: &Frequencies, gold_std: &Frequencies) -> Result<()> {
    let mut err = String::new();

    if result.len() != gold_std.len() {
        err.push_str(&format!(
            "result length ({}) != gold_std length ({})",
            result.len(),
            gold_std.len()
        ));
    }

    append_mismatches(&mut err, "Superfluous words: ", result, gold_std);
    append_mismatches(&mut err, "Missing words: ", gold_std, result);

    if !err.is_empty() {
        bail!(err);
    }
    Ok(())
}

// Appends the keys of `from` absent in `against`: the header once, on a new
// line if anything came before it, then every offender joined with ": ".
fn append_mismatches(err: &mut String, header: &str, from: &Frequencies, against: &Frequencies) {
    let mut added_header = false;
    for key in from.keys() {
        if !against.contains_key(key) {
            if !added_header {
                if !err.is_empty() {
                    err.push('\n');
                }
                err.push_str(header);
                added_header = true;
            } else {
                err.push_str(": ");
            }
            err.push_str(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs(pairs: &[(&str, usize)]) -> Frequencies {
        pairs.iter().map(|(word, count)| (word.to_string(), *count)).collect()
    }

    #[test]
    fn test_identical_maps_pass() {
        let map = freqs(&[("one", 1), ("two", 2)]);

        assert!(compare(&map, &map.clone()).is_ok());
        assert!(compare(&Frequencies::new(), &Frequencies::new()).is_ok());
    }

    #[test]
    fn test_counts_are_not_checked() {
        // Only key sets are diffed; differing counts pass.
        let result = freqs(&[("one", 1)]);
        let gold_std = freqs(&[("one", 5)]);

        assert!(compare(&result, &gold_std).is_ok());
    }

    #[test]
    fn test_superfluous_words_reported() {
        let result = freqs(&[("a", 1), ("b", 2), ("c", 3)]);
        let gold_std = freqs(&[("a", 1)]);

        let err = compare(&result, &gold_std).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result length (3) != gold_std length (1)\nSuperfluous words: b: c"
        );
    }

    #[test]
    fn test_missing_words_reported() {
        let result = freqs(&[("a", 1)]);
        let gold_std = freqs(&[("a", 1), ("b", 2), ("c", 3)]);

        let err = compare(&result, &gold_std).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result length (1) != gold_std length (3)\nMissing words: b: c"
        );
    }

    #[test]
    fn test_equal_sizes_skip_size_line() {
        // The first segment then starts without a leading newline.
        let result = freqs(&[("a", 1), ("x", 1)]);
        let gold_std = freqs(&[("a", 1), ("y", 1)]);

        let err = compare(&result, &gold_std).unwrap_err();
        assert_eq!(err.to_string(), "Superfluous words: x\nMissing words: y");
    }

    #[test]
    fn test_multiple_mismatches_on_both_sides() {
        let result = freqs(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        let gold_std = freqs(&[("a", 1), ("e", 1), ("f", 1)]);

        let err = compare(&result, &gold_std).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result length (4) != gold_std length (3)\n\
             Superfluous words: b: c: d\n\
             Missing words: e: f"
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let result = freqs(&[("a", 1), ("b", 1)]);
        let gold_std = freqs(&[("a", 1)]);
        let before = result.clone();

        let _ = compare(&result, &gold_std);
        assert_eq!(result, before);
    }
}
