use crate::model::counts::SampleCounts;
use crate::model::matrix::{CountMatrix, CountTable};

pub fn run_stage3(records: &[SampleCounts]) -> CountMatrix {
    let table = CountTable::from_records(records);
    let matrix = table.transpose();
    tracing::info!(
        genes = matrix.genes.len(),
        samples = matrix.samples.len(),
        "count matrix assembled"
    );
    matrix
}
