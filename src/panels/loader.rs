use std::path::Path;

use serde::Deserialize;

use crate::input::read_to_string_maybe_gz;
use crate::panels::{PanelError, ProbeMap};

#[derive(Debug, Deserialize)]
struct PkcFile {
    #[serde(rename = "Targets")]
    targets: Vec<PkcTarget>,
}

#[derive(Debug, Deserialize)]
struct PkcTarget {
    #[serde(rename = "DisplayName")]
    display_name: String,
    #[serde(rename = "Probes")]
    probes: Vec<PkcProbe>,
}

#[derive(Debug, Deserialize)]
struct PkcProbe {
    #[serde(rename = "RTS_ID")]
    rts_id: String,
}

pub fn load_pkc(path: &Path) -> Result<ProbeMap, PanelError> {
    let content = read_to_string_maybe_gz(path)?;
    let map = parse_pkc(&content, path)?;
    if map.is_empty() {
        tracing::warn!(file = %path.display(), "panel declares no targets");
    } else {
        tracing::info!(file = %path.display(), probes = map.len(), "panel loaded");
    }
    Ok(map)
}

/// Only the first probe of each target is consulted. `origin` names the
/// source in errors.
pub fn parse_pkc(content: &str, origin: &Path) -> Result<ProbeMap, PanelError> {
    let pkc: PkcFile = serde_json::from_str(content).map_err(|source| PanelError::Json {
        path: origin.display().to_string(),
        source,
    })?;

    let mut map = ProbeMap::default();
    for target in pkc.targets {
        let Some(first) = target.probes.into_iter().next() else {
            return Err(PanelError::NoProbes {
                target: target.display_name,
            });
        };
        map.insert(first.rts_id, target.display_name);
    }
    Ok(map)
}
