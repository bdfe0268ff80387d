use itertools::Itertools;
use schemabench_ingest::Measurement;
use std::collections::BTreeMap;

/// Mean run time of one schema
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMean {
    pub schema_name: String,
    pub mean_time: f64,
    pub runs: usize,
}

/// average `Time` per schema, sorted by schema name
pub fn mean_time_by_schema(rows: &[Measurement]) -> Vec<SchemaMean> {
    rows.iter()
        .fold(BTreeMap::<&str, (f64, usize)>::new(), |mut groups, row| {
            let (total, runs) = groups.entry(row.schema_name.as_str()).or_default();
            *total += row.time;
            *runs += 1;

            groups
        })
        .into_iter()
        .map(|(schema_name, (total, runs))| SchemaMean {
            schema_name: schema_name.to_owned(),
            mean_time: total / runs as f64,
            runs,
        })
        .collect_vec()
}
