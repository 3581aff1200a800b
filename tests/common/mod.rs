use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn quicknote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quicknote").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a notes store with the given (id, title, body, timestamp) records
#[allow(dead_code)]
pub fn write_store(dir: &Path, notes: &[(&str, &str, &str, &str)]) {
    let records: Vec<serde_json::Value> = notes
        .iter()
        .map(|(id, title, body, timestamp)| {
            serde_json::json!({
                "id": id,
                "title": title,
                "body": body,
                "timestamp": timestamp,
            })
        })
        .collect();
    fs::write(
        dir.join("notes.json"),
        serde_json::to_string(&records).unwrap(),
    )
    .unwrap();
}
