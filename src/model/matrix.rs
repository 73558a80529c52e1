use indexmap::IndexSet;

use crate::model::counts::SampleCounts;

/// Samples x genes, one row per DCC file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    pub samples: Vec<String>,
    pub genes: Vec<String>,
    pub cells: Vec<Vec<Option<u64>>>,
}

/// Genes x samples, the layout written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMatrix {
    pub genes: Vec<String>,
    pub samples: Vec<String>,
    pub cells: Vec<Vec<Option<u64>>>,
}

impl CountTable {
    /// Gene columns are the union over all records, in first-seen order.
    pub fn from_records(records: &[SampleCounts]) -> Self {
        let mut genes: IndexSet<&str> = IndexSet::new();
        for record in records {
            genes.extend(record.genes.keys().map(String::as_str));
        }

        let cells = records
            .iter()
            .map(|record| {
                genes
                    .iter()
                    .map(|gene| record.genes.get(*gene).copied())
                    .collect::<Vec<_>>()
            })
            .collect();

        CountTable {
            samples: records.iter().map(|r| r.sample_name.clone()).collect(),
            genes: genes.into_iter().map(str::to_string).collect(),
            cells,
        }
    }

    pub fn transpose(&self) -> CountMatrix {
        let cells = (0..self.genes.len())
            .map(|g| self.cells.iter().map(|row| row[g]).collect::<Vec<_>>())
            .collect();
        CountMatrix {
            genes: self.genes.clone(),
            samples: self.samples.clone(),
            cells,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
