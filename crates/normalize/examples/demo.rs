use normalize::{normalize_traced, Stage};
use std::env;
use std::fs;

const SAMPLE: &str = "  the QUICK brown fox ,jumped\n\nover the \" Lazy Dog \" .then it slept  ";

fn main() {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).expect("input path invalid"),
        None => SAMPLE.to_string(),
    };

    let (normalized, snapshots) = normalize_traced(&text);
    for snapshot in &snapshots {
        println!("{:<26} {}", snapshot.stage.name(), snapshot.text);
    }
    println!();
    println!("stages:     {}", Stage::ALL.len());
    println!("normalized: {normalized}");
}
