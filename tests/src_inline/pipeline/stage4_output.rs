use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_dspmatrix_output_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_csv_layout() {
    let dir = make_temp_dir();
    let path = dir.join("nested/out/count_matrix.csv");
    let matrix = CountMatrix {
        genes: vec!["Gapdh".to_string(), "Actb".to_string()],
        samples: vec!["scan1_seg1_groupA".to_string(), "No Template Control".to_string()],
        cells: vec![vec![Some(42), None], vec![Some(0), Some(7)]],
    };
    write_count_matrix(&matrix, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        ",scan1_seg1_groupA,No Template Control\nGapdh,42,\nActb,0,7\n"
    );
}

#[test]
fn test_quotes_names_with_commas() {
    let dir = make_temp_dir();
    let path = dir.join("count_matrix.csv");
    let matrix = CountMatrix {
        genes: vec!["Gene,1".to_string()],
        samples: vec!["s1".to_string()],
        cells: vec![vec![Some(1)]],
    };
    write_count_matrix(&matrix, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, ",s1\n\"Gene,1\",1\n");
}
