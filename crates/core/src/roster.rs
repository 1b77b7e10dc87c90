//! Appearance tally over a fixed character roster

use crate::error::{DrillError, Result};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// The fixed appearance log, in original order.
pub const APPEARANCES: [&str; 12] = [
    "Luke Skywalker",
    "Leia Organa",
    "Han Solo",
    "Luke Skywalker",
    "Luke Skywalker",
    "Leia Organa",
    "Yoda",
    "Yoda",
    "Leia Organa",
    "Luke Skywalker",
    "Darth Vader",
    "Darth Sidious",
];

/// The expected counts for the fixed log. Sith show up in the log but are
/// never tallied, so their expected count is zero.
pub const EXPECTED: [(&str, usize); 6] = [
    ("Luke Skywalker", 4),
    ("Leia Organa", 3),
    ("Han Solo", 1),
    ("Yoda", 2),
    ("Darth Vader", 0),
    ("Darth Sidious", 0),
];

/// Sith are recognized by their title and excluded from the tally.
pub fn is_sith(name: &str) -> bool {
    name.starts_with("Darth ")
}

/// Per-character appearance counts
#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    counts: HashMap<String, usize>,
}

impl TallyReport {
    /// Count for a character; absent names count zero
    pub fn count_for(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Names that made it into the tally
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check one count against an expected value
    pub fn verify(&self, name: &str, expected: usize) -> Result<()> {
        let got = self.count_for(name);
        if got != expected {
            return Err(DrillError::CountMismatch {
                name: name.to_string(),
                got,
                expected,
            });
        }
        Ok(())
    }
}

/// Tally every appearance, skipping Sith
pub fn tally<'a, I>(appearances: I) -> TallyReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for name in appearances {
        if is_sith(name) {
            debug!("skipping sith: {}", name);
            continue;
        }
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }

    TallyReport { counts }
}

/// Run the full expectation table against a report
pub fn verify_expected(report: &TallyReport) -> Result<()> {
    for (name, expected) in EXPECTED {
        report.verify(name, expected)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_fixed_roster() {
        let report = tally(APPEARANCES);

        assert_eq!(report.count_for("Luke Skywalker"), 4);
        assert_eq!(report.count_for("Leia Organa"), 3);
        assert_eq!(report.count_for("Han Solo"), 1);
        assert_eq!(report.count_for("Yoda"), 2);
    }

    #[test]
    fn test_sith_excluded() {
        let report = tally(APPEARANCES);

        // Present in the log, absent from the tally
        assert_eq!(report.count_for("Darth Vader"), 0);
        assert_eq!(report.count_for("Darth Sidious"), 0);
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn test_absent_name_counts_zero() {
        let report = tally(APPEARANCES);
        assert_eq!(report.count_for("Obi-Wan Kenobi"), 0);
    }

    #[test]
    fn test_verify_expected_passes() {
        let report = tally(APPEARANCES);
        assert!(verify_expected(&report).is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let report = tally(APPEARANCES);
        let err = report.verify("Yoda", 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Got 2 for [Yoda], expected 7"
        );
    }

    #[test]
    fn test_empty_input() {
        let report = tally([]);
        assert!(report.is_empty());
        assert_eq!(report.count_for("Luke Skywalker"), 0);
    }

    #[test]
    fn test_is_sith() {
        assert!(is_sith("Darth Vader"));
        assert!(is_sith("Darth Sidious"));
        assert!(!is_sith("Yoda"));
    }
}
