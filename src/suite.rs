use colored::Colorize;
use tracing::debug;

use crate::compare::compare;
use crate::counter::{self, Frequencies, word_counts};

/// One immutable test case: the sentences to count, the gold standard to
/// check against, and the exact error message the check is expected to fail
/// with (or None when it should pass).
pub struct TestCase {
    pub sentences: Vec<String>,
    pub gold_std: Frequencies,
    pub expected_error: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    PassExpectedError,
    /// Report body printed after the "FAIL:" line.
    Fail(String),
}

/// Counts the case's sentences and classifies the comparison result against
/// the case's expectation.
pub fn run_case(case: &TestCase) -> CaseOutcome {
    let frequencies = word_counts(&case.sentences);

    debug!(
        "counted {} tokens, {} distinct words",
        counter::total(&frequencies),
        frequencies.len()
    );
    for (word, count) in &frequencies {
        debug!("{:?} : {}", word, count);
    }

    match (compare(&frequencies, &case.gold_std), &case.expected_error) {
        (Ok(()), None) => CaseOutcome::Pass,
        // The comparison was supposed to fail but did not; report it instead
        // of falling through to OK.
        (Ok(()), Some(expected)) => CaseOutcome::Fail(failure_body(
            &format!("expected error did not occur: {}", expected),
            &frequencies,
            &case.gold_std,
        )),
        (Err(e), Some(expected)) if e.to_string() == *expected => CaseOutcome::PassExpectedError,
        (Err(e), _) => {
            CaseOutcome::Fail(failure_body(&e.to_string(), &frequencies, &case.gold_std))
        }
    }
}

// Embedded newlines are indented so the whole report stays nested under the
// "FAIL:" line, and both tables are attached for debugging.
fn failure_body(message: &str, frequencies: &Frequencies, gold_std: &Frequencies) -> String {
    format!(
        "{}\n\tfrequencies: {:?}\n\tgold_std: {:?}",
        message.replace('\n', "\n\t"),
        frequencies,
        gold_std
    )
}

/// Prints one line per case, numbering from 1 regardless of outcome, and
/// returns how many cases failed.
pub fn run(cases: &[TestCase]) -> usize {
    let mut failed = 0;
    for (idx, case) in cases.iter().enumerate() {
        let num = idx + 1;
        match run_case(case) {
            CaseOutcome::Pass => println!("test case {}: {}", num, "OK".green()),
            CaseOutcome::PassExpectedError => {
                println!("test case {}: {} (got expected exception)", num, "OK".green());
            }
            CaseOutcome::Fail(body) => {
                failed += 1;
                println!("test case {}: {}:\n\t{}", num, "FAIL".red(), body);
            }
        }
    }
    failed
}

fn gold(entries: &[(&str, usize)]) -> Frequencies {
    entries.iter().map(|(word, count)| (word.to_string(), *count)).collect()
}

/// The three cases shipped with the exercise.
pub fn builtin_cases() -> Vec<TestCase> {
    let sentences = vec![
        "this is my first sentence and my first test".to_string(),
        "here is another sentence let us see if this is my third thing".to_string(),
    ];

    vec![
        TestCase {
            sentences: sentences.clone(),
            gold_std: gold(&[
                ("thing", 1),
                ("this", 2),
                ("is", 3),
                ("third", 1),
                ("let", 1),
                ("my", 3),
                ("another", 1),
                ("see", 1),
                ("sentence", 2),
                ("and", 1),
                ("first", 2),
                ("test", 1),
                ("here", 1),
                ("if", 1),
                ("us", 1),
            ]),
            expected_error: None,
        },
        // Same sentences, but the gold standard drops "and".
        TestCase {
            sentences: sentences.clone(),
            gold_std: gold(&[
                ("thing", 1),
                ("this", 2),
                ("is", 3),
                ("third", 1),
                ("let", 1),
                ("my", 3),
                ("another", 1),
                ("see", 1),
                ("sentence", 2),
                ("first", 2),
                ("test", 1),
                ("here", 1),
                ("if", 1),
                ("us", 1),
            ]),
            expected_error: Some(
                "result length (15) != gold_std length (14)\nSuperfluous words: and".to_string(),
            ),
        },
        // Same sentences, but the gold standard adds "monkey".
        TestCase {
            sentences,
            gold_std: gold(&[
                ("thing", 1),
                ("this", 2),
                ("is", 3),
                ("third", 1),
                ("let", 1),
                ("my", 3),
                ("another", 1),
                ("see", 1),
                ("sentence", 2),
                ("and", 1),
                ("first", 2),
                ("test", 1),
                ("here", 1),
                ("if", 1),
                ("us", 1),
                ("monkey", 1),
            ]),
            expected_error: Some(
                "result length (15) != gold_std length (16)\nMissing words: monkey".to_string(),
            ),
        },
    ]
}
