use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::meta::MetaError;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_dspmatrix_stage2_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn meta() -> SampleTable {
    SampleTable {
        columns: ["Sample_ID", "scan name", "segment", "group", "slide name"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: vec![
            ["DSP-1", "scan1", "seg1", "groupA", "slide 1"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ["DSP-2", "scan1", "seg2", "groupA", "No Template Control"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ],
    }
}

fn probes() -> ProbeMap {
    [("RTS001", "Gapdh"), ("RTS002", "Actb")]
        .iter()
        .map(|(p, g)| (p.to_string(), g.to_string()))
        .collect()
}

fn write_dcc(dir: &std::path::Path, name: &str, block: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("<Code_Summary>\n{block}</Code_Summary>\n")).unwrap();
    path
}

#[test]
fn test_records_per_file() {
    let dir = make_temp_dir();
    let files = vec![
        write_dcc(&dir, "DSP-1.dcc", "RTS001,5\nRTS002,1\nRTS999,4\n"),
        write_dcc(&dir, "DSP-2.dcc", "RTS002,2\nbad line\n"),
    ];
    let out = run_stage2(&files, &probes(), &meta()).unwrap();

    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[0].sample_id, "DSP-1");
    assert_eq!(out.records[0].sample_name, "scan1_seg1_groupA");
    assert_eq!(out.records[0].genes["Gapdh"], 5);
    assert_eq!(out.records[1].sample_name, "No Template Control");
    assert_eq!(out.records[1].genes["Actb"], 2);
    assert_eq!(out.skipped.unknown_probe, 1);
    assert_eq!(out.skipped.malformed, 1);
}

#[test]
fn test_unknown_sample_aborts() {
    let dir = make_temp_dir();
    let files = vec![write_dcc(&dir, "DSP-9.dcc", "RTS001,5\n")];
    let err = run_stage2(&files, &probes(), &meta()).unwrap_err();
    assert!(matches!(err, MatrixError::Meta(MetaError::SampleNotFound(_))));
}
