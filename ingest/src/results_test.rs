use crate::results::{Measurement, ResultsTable, TestKind, UnknownTestName};

fn row(test: &str, algo: &str, schema: &str, size: u64, time: f64) -> Measurement {
    Measurement {
        test_name: test.to_owned(),
        encryption_algo: algo.to_owned(),
        schema_name: schema.to_owned(),
        database_size: size,
        time,
    }
}

#[test]
pub fn test_kind_round_trips_known_names() {
    for kind in TestKind::ALL {
        assert_eq!(kind.as_str().parse::<TestKind>(), Ok(kind));
    }
    assert_eq!("FindWhereDOB".parse::<TestKind>(), Ok(TestKind::FindWhereDob));
}

#[test]
pub fn test_kind_rejects_unknown_names() {
    assert_eq!(
        "RunUpserts".parse::<TestKind>(),
        Err(UnknownTestName("RunUpserts".to_owned()))
    );
    // exact spelling only
    assert!("runcreates".parse::<TestKind>().is_err());
}

#[test]
pub fn distinct_values_follow_first_appearance() {
    let table = ResultsTable::new(vec![
        row("RunFinds", "Randomized", "A", 1, 0.1),
        row("RunCreates", "Deterministic", "A", 1, 0.1),
        row("RunFinds", "Deterministic", "B", 1, 0.1),
        row("FindWhereDOB", "Randomized", "B", 1, 0.1),
        row("RunCreates", "Randomized", "A", 1, 0.1),
    ]);

    assert_eq!(
        table.distinct_encryption_algos(),
        vec!["Randomized", "Deterministic"]
    );
    assert_eq!(
        table.distinct_test_names(),
        vec!["RunFinds", "RunCreates", "FindWhereDOB"]
    );
}

#[test]
pub fn filter_copies_matching_rows_and_leaves_table_alone() {
    let table: ResultsTable = vec![
        row("RunFinds", "Randomized", "A", 10, 0.1),
        row("RunFinds", "Randomized", "B", 20, 0.2),
        row("RunDeletes", "Randomized", "A", 30, 0.3),
    ]
    .into_iter()
    .collect();

    let finds = table.filter(|row| row.test_name == "RunFinds");

    assert_eq!(finds.len(), 2);
    assert_eq!(finds[1].schema_name, "B");
    assert_eq!(table.len(), 3);
}
