#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use utilkit_core::files::{self, TEXT_PLAIN_UTF8};
use utilkit_core::{archive, json};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Manifest {
    name: String,
    files: Vec<String>,
}

#[test]
fn zip_unzip_then_list() -> anyhow::Result<()> {
    let work: TempDir = TempDir::new()?;
    let data = work.path().join("data");
    fs::create_dir_all(data.join("nested"))?;
    fs::write(data.join("a.csv"), "x,y\n1,2\n")?;
    fs::write(data.join("nested/b.csv"), "z\n3\n")?;
    fs::write(data.join("blob.csv"), [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0])?;

    let zipped = work.path().join("data.zip");
    assert_eq!(archive::zip(&data, &zipped)?, 3);

    let out = work.path().join("out");
    let extracted: Vec<PathBuf> = archive::unzip(&zipped, &out)?;
    assert_eq!(extracted.len(), 3);
    assert_eq!(fs::read(out.join("data/nested/b.csv"))?, b"z\n3\n");

    let texts = files::list_files(out.join("data"), TEXT_PLAIN_UTF8, &[".csv"])?;
    assert_eq!(texts, vec![out.join("data/a.csv"), out.join("data/nested/b.csv")]);
    Ok(())
}

#[test]
fn manifest_roundtrips_through_json() -> anyhow::Result<()> {
    let manifest = Manifest {
        name: "batch".into(),
        files: vec!["a.csv".into(), "b.csv".into()],
    };
    let text: String = json::to_json_string(&manifest)?;
    assert_eq!(text, r#"{"name":"batch","files":["a.csv","b.csv"]}"#);
    assert_eq!(json::from_json_str::<Manifest>(&text)?, manifest);
    assert!(json::from_json_str::<Manifest>("{\"name\":1}").is_err());
    Ok(())
}

#[test]
fn unzip_missing_archive_fails() {
    let work = TempDir::new().unwrap();
    let res = archive::unzip(work.path().join("nope.zip"), work.path().join("out"));
    assert!(res.is_err());
}
