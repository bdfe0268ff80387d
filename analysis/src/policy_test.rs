use crate::policy::{fit_enabled, scatter_title, test_label, RegressionOrder};
use schemabench_ingest::TestKind;

#[test]
pub fn regression_order_table() {
    use RegressionOrder::*;

    let cases = [
        ("Randomized", "RunCreates", Linear),
        ("Randomized", "RunFinds", Quadratic),
        ("Randomized", "RunUpdates", Quadratic),
        ("Randomized", "RunDeletes", Quadratic),
        ("Randomized", "FindWhereDOB", Quadratic),
        ("Deterministic", "RunCreates", Linear),
        ("Deterministic", "RunFinds", Linear),
        ("Deterministic", "RunUpdates", Linear),
        ("Deterministic", "RunDeletes", Linear),
        ("Deterministic", "FindWhereDOB", Quadratic),
        ("not set", "FindWhereDOB", Quadratic),
        ("not set", "RunFinds", Linear),
    ];

    for (algo, test, expected) in cases {
        assert_eq!(
            RegressionOrder::select(algo, test),
            expected,
            "{algo} / {test}"
        );
    }
}

#[test]
pub fn regression_degrees() {
    assert_eq!(RegressionOrder::Linear.degree(), 1);
    assert_eq!(RegressionOrder::Quadratic.degree(), 2);
}

#[test]
pub fn fit_disabled_only_for_creates() {
    for kind in TestKind::ALL {
        assert_eq!(fit_enabled(kind.as_str()), kind != TestKind::Creates);
    }
}

#[test]
pub fn labels_cover_every_known_test() {
    let labels = TestKind::ALL.map(|kind| test_label(kind.as_str()).unwrap());

    assert_eq!(
        labels,
        [
            "Create Test",
            "Find by Name Test",
            "Update Phone by Name Test",
            "Delete by Name Test",
            "Find Where DOB Test",
        ]
    );
}

#[test]
pub fn unknown_test_has_no_title() {
    assert!(test_label("RunUpserts").is_err());
    assert!(scatter_title("Randomized", "RunUpserts").is_err());
}

#[test]
pub fn title_combines_label_and_algorithm() {
    assert_eq!(
        scatter_title("Randomized", "RunUpdates").unwrap(),
        "Update Phone by Name Test for Randomized Encryption"
    );
}
