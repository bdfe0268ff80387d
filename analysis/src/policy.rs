//! Per-test plotting choices.
//!
//! The curve shapes and labels were picked by eye for the benchmark results and are fixed.

use schemabench_ingest::{TestKind, UnknownTestName, RANDOMIZED};

/// Degree of the polynomial drawn through each scatter series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionOrder {
    Linear = 1,
    Quadratic = 2,
}

impl RegressionOrder {
    /// quadratic for randomized non-create tests and for the date of birth search, linear otherwise
    pub fn select(encryption_algo: &str, test_name: &str) -> Self {
        let randomized_non_create =
            encryption_algo == RANDOMIZED && !TestKind::Creates.matches(test_name);

        if randomized_non_create || TestKind::FindWhereDob.matches(test_name) {
            Self::Quadratic
        } else {
            Self::Linear
        }
    }

    pub fn degree(self) -> usize {
        self as usize
    }
}

/// create times don't depend on the database size, so they get points only
pub fn fit_enabled(test_name: &str) -> bool {
    !TestKind::Creates.matches(test_name)
}

pub fn test_label(test_name: &str) -> Result<&'static str, UnknownTestName> {
    Ok(match test_name.parse::<TestKind>()? {
        TestKind::Creates => "Create Test",
        TestKind::Finds => "Find by Name Test",
        TestKind::Updates => "Update Phone by Name Test",
        TestKind::Deletes => "Delete by Name Test",
        TestKind::FindWhereDob => "Find Where DOB Test",
    })
}

pub fn scatter_title(encryption_algo: &str, test_name: &str) -> Result<String, UnknownTestName> {
    Ok(format!(
        "{} for {encryption_algo} Encryption",
        test_label(test_name)?
    ))
}
