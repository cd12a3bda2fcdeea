use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use serde_json::Value;

fn run_json(temp_dir: &TempDir, args: &[&str]) -> (Option<i32>, Value) {
    let output = Command::cargo_bin("sheet-rename")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(args)
        .args(["--output", "json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    (output.status.code(), json)
}

#[test]
fn test_rename_output_json() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("files/a.ies").write_str("").unwrap();
    temp_dir
        .child("renames.csv")
        .write_str(
            "Old File Name,IES,Photometric_Report,Gos_Report\n\
             a.ies,b.ies,,\n\
             c.pdf,,,\n\
             missing.gos,,,d.gos\n",
        )
        .unwrap();

    let (code, json) = run_json(&temp_dir, &["rename", "files", "renames.csv"]);

    assert_eq!(code, Some(0));
    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "rename");
    assert_eq!(json["file_type"], "all");
    assert_eq!(json["rows"], 3);
    assert_eq!(json["summary"]["renamed"], 1);
    assert_eq!(json["summary"]["skipped_no_new_name"], 1);
    assert_eq!(json["summary"]["not_found"], 1);
    assert_eq!(json["summary"]["errors"], 0);
    assert_eq!(json["succeeded"][0]["status"], "renamed");
    assert_eq!(json["succeeded"][0]["new"], "b.ies");
    assert_eq!(json["failed"][0]["old"], "c.pdf");
    assert_eq!(json["failed"][1]["status"], "not_found");
}

#[test]
fn test_rename_output_json_nothing_renamed() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("files").create_dir_all().unwrap();
    temp_dir
        .child("renames.csv")
        .write_str("Old File Name,IES,Photometric_Report,Gos_Report\nx.ies,y.ies,,\n")
        .unwrap();

    let (code, json) = run_json(
        &temp_dir,
        &["rename", "files", "renames.csv", "--file-type", "ies"],
    );

    assert_eq!(code, Some(1));
    assert_eq!(json["success"], false);
    assert_eq!(json["file_type"], "ies");
    assert_eq!(json["failed"][0]["status"], "not_found");
}

#[test]
fn test_template_output_json() {
    let temp_dir = TempDir::new().unwrap();

    let (code, json) = run_json(&temp_dir, &["template", "--format", "csv"]);

    assert_eq!(code, Some(0));
    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "template");
    assert_eq!(json["format"], "csv");
    assert_eq!(json["mime_type"], "text/csv");
    assert_eq!(json["rows"], 3);
}
