use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use sheet_rename_core::{load_table, TableFormat};

const HEADER: &str = "Old File Name,IES,Photometric_Report,Gos_Report\n";

fn sheet_rename() -> Command {
    Command::cargo_bin("sheet-rename").unwrap()
}

/// Folder with the files to rename plus a CSV table next to it
fn fixture(rows: &str, files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        temp_dir.child("files").child(file).write_str(file).unwrap();
    }
    temp_dir.child("files").create_dir_all().unwrap();
    temp_dir
        .child("renames.csv")
        .write_str(&format!("{HEADER}{rows}"))
        .unwrap();
    temp_dir
}

#[test]
fn test_help_command() {
    sheet_rename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rename IES, PDF and GOS files from a spreadsheet of old and new names",
        ))
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_version_subcommand() {
    sheet_rename()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheet-rename 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    sheet_rename()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r#"\{"name":"sheet-rename","version":"0\.1\.0"\}"#).unwrap(),
        );
}

#[test]
fn test_template_csv() {
    let temp_dir = TempDir::new().unwrap();

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["template", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Template written to ./File_Renaming_Template.csv",
        ));

    temp_dir
        .child("File_Renaming_Template.csv")
        .assert(predicate::str::starts_with(HEADER))
        .assert(predicate::str::contains("example_file.gos,,,new_gos_file"));
}

#[test]
fn test_template_xlsx_loads_back() {
    let temp_dir = TempDir::new().unwrap();

    sheet_rename()
        .args(["-C", temp_dir.path().to_str().unwrap(), "template"])
        .assert()
        .success();

    let path = temp_dir.path().join(TableFormat::Xlsx.template_file_name());
    let table = load_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[1].old_file_name, "example_file.pdf");
    assert_eq!(table.rows()[1].photometric_new_name, "new_pdf_file");
}

#[test]
fn test_template_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.child("mine.csv");
    existing.write_str("keep me").unwrap();

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["template", "--format", "csv", "--out", "mine.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    existing.assert("keep me");

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["template", "--format", "csv", "--out", "mine.csv", "--force"])
        .assert()
        .success();
    existing.assert(predicate::str::starts_with(HEADER));
}

#[test]
fn test_template_format_from_config() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".sheet-rename/config.toml")
        .write_str("[defaults]\ntemplate_format = \"csv\"\n")
        .unwrap();

    sheet_rename()
        .current_dir(temp_dir.path())
        .arg("template")
        .assert()
        .success();

    temp_dir
        .child("File_Renaming_Template.csv")
        .assert(predicate::path::exists());
    temp_dir
        .child("File_Renaming_Template.xlsx")
        .assert(predicate::path::missing());
}

#[test]
fn test_rename_reports_each_outcome() {
    let temp_dir = fixture(
        "a.ies,b.ies,,\nc.pdf,,  ,\nmissing.gos,,,d.gos\nnotes.txt,x,y,z\n",
        &["a.ies", "c.pdf", "notes.txt"],
    );

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Files:\n✅ a.ies → b.ies"))
        .stdout(predicate::str::contains("Issues Found:"))
        .stdout(predicate::str::contains(
            "⚠️ New name not provided for: c.pdf",
        ))
        .stdout(predicate::str::contains("❌ File not found: missing.gos"))
        .stdout(predicate::str::contains("notes.txt").not());

    temp_dir.child("files/b.ies").assert("a.ies");
    temp_dir.child("files/a.ies").assert(predicate::path::missing());
    temp_dir.child("files/c.pdf").assert(predicate::path::exists());
    temp_dir.child("files/notes.txt").assert(predicate::path::exists());
}

#[test]
fn test_rename_nothing_renamed_exits_one() {
    let temp_dir = fixture("c.pdf,,,\n", &["c.pdf"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No files were renamed."));
}

#[test]
fn test_rename_missing_columns_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("files/a.ies").write_str("").unwrap();
    temp_dir
        .child("renames.csv")
        .write_str("Old File Name,IES\na.ies,b.ies\n")
        .unwrap();

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Template must contain columns"))
        .stderr(predicate::str::contains(
            "missing: Photometric_Report, Gos_Report",
        ));

    temp_dir.child("files/a.ies").assert(predicate::path::exists());
    temp_dir.child("files/b.ies").assert(predicate::path::missing());
}

#[test]
fn test_rename_unsupported_table_format() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("renames.json").write_str("{}").unwrap();

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", ".", "renames.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported table format"));
}

#[test]
fn test_rename_empty_folder_argument() {
    let temp_dir = fixture("a.ies,b.ies,,\n", &["a.ies"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "", "renames.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Please provide both the folder path and the table file.",
        ));
}

#[test]
fn test_rename_with_file_uri_folder() {
    let temp_dir = fixture("a.ies,b.ies,,\n", &["a.ies"]);
    let folder = temp_dir.path().join("files");
    let uri = format!("file://{}", folder.display());

    if cfg!(unix) {
        sheet_rename()
            .current_dir(temp_dir.path())
            .args(["rename", uri.as_str(), "renames.csv"])
            .assert()
            .success();

        temp_dir.child("files/b.ies").assert(predicate::path::exists());
    }
}

#[test]
fn test_rename_file_type_selection_is_not_a_filter() {
    let temp_dir = fixture("a.ies,b.ies,,\nc.gos,,,d.gos\n", &["a.ies", "c.gos"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv", "--file-type", "pdf"])
        .assert()
        .success();

    temp_dir.child("files/b.ies").assert(predicate::path::exists());
    temp_dir.child("files/d.gos").assert(predicate::path::exists());
}

#[test]
fn test_rename_table_report() {
    let temp_dir = fixture("a.ies,b.ies,,\nmissing.pdf,,x.pdf,\n", &["a.ies"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv", "--report", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old File Name"))
        .stdout(predicate::str::contains("b.ies"))
        .stdout(predicate::str::contains("missing.pdf"));
}

#[test]
fn test_rename_quiet() {
    let temp_dir = fixture("a.ies,b.ies,,\n", &["a.ies"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp_dir.child("files/b.ies").assert(predicate::path::exists());
}

#[test]
fn test_rename_twice_reports_not_found() {
    let temp_dir = fixture("a.ies,b.ies,,\n", &["a.ies"]);

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv"])
        .assert()
        .success();

    sheet_rename()
        .current_dir(temp_dir.path())
        .args(["rename", "files", "renames.csv"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ File not found: a.ies"));
}
