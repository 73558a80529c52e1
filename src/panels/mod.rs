use std::collections::BTreeMap;

use thiserror::Error;

use crate::input::InputError;

pub mod loader;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("malformed PKC {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("PKC target {target} has no probes")]
    NoProbes { target: String },
}

/// Probe `RTS_ID` to target display name, as declared by a PKC file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeMap {
    genes_by_probe: BTreeMap<String, String>,
}

impl ProbeMap {
    pub fn insert(&mut self, probe_id: String, gene: String) {
        self.genes_by_probe.insert(probe_id, gene);
    }

    pub fn gene_for(&self, probe_id: &str) -> Option<&str> {
        self.genes_by_probe.get(probe_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.genes_by_probe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes_by_probe.is_empty()
    }
}

impl FromIterator<(String, String)> for ProbeMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ProbeMap {
            genes_by_probe: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/tests.rs"]
mod tests;
