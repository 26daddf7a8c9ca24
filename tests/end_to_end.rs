//! End-to-end pipeline tests over a real directory tree.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use reqscan::inventory::{InstalledPackage, InventoryProvider, StaticInventory};
use reqscan::manifest::{manifest_path, write_manifest};
use reqscan::parser::collect_package_names;
use reqscan::resolve::resolve_used;
use reqscan::scan::{extract_imports, walk_files};

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn generates_manifest_for_detected_imports() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir.path().join("app.py"),
        "import os\nimport requests\nfrom .utils import helper\n",
    );
    // decoy import inside an excluded virtual environment
    write_file(&dir.path().join("venv/lib/decoy.py"), "import flask\n");

    let walk = walk_files(dir.path(), &["venv".to_string()]);
    let extraction = extract_imports(&walk.files);
    let imported = collect_package_names(extraction.imports.iter().map(|i| i.text.as_str()));
    assert_eq!(imported, vec!["os", "requests"]);

    let inventory = StaticInventory::new(vec![
        InstalledPackage::new("requests", "2.31.0"),
        InstalledPackage::new("flask", "3.0.0"),
    ])
    .installed()
    .unwrap();
    let used = resolve_used(&imported, &inventory.packages);

    let path = manifest_path(dir.path());
    write_manifest(&path, &used).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "requests==2.31.0\n");
}

#[test]
fn continuation_statements_resolve_across_lines() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("main.py"), "import os, \\\nrequests\n");

    let walk = walk_files(dir.path(), &[]);
    let extraction = extract_imports(&walk.files);
    let imported = collect_package_names(extraction.imports.iter().map(|i| i.text.as_str()));

    assert_eq!(imported, vec!["os", "requests"]);
}

#[test]
fn case_insensitive_match_keeps_inventory_casing() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("conf.py"), "import yaml\nimport PyYAML\n");

    let walk = walk_files(dir.path(), &[]);
    let extraction = extract_imports(&walk.files);
    let imported = collect_package_names(extraction.imports.iter().map(|i| i.text.as_str()));

    let inventory = StaticInventory::new(vec![InstalledPackage::new("pyyaml", "6.0")])
        .installed()
        .unwrap();
    let used = resolve_used(&imported, &inventory.packages);

    assert_eq!(used.len(), 1);
    assert_eq!(used[0].name, "pyyaml");
    assert_eq!(used[0].version, "6.0");
}

#[test]
fn repeated_runs_produce_identical_manifests() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir.path().join("a.py"),
        "import requests\nimport pyyaml\nimport requests\n",
    );

    let inventory = StaticInventory::new(vec![
        InstalledPackage::new("PyYAML", "6.0"),
        InstalledPackage::new("requests", "2.31.0"),
    ])
    .installed()
    .unwrap();

    let mut manifests = Vec::new();
    for _ in 0..2 {
        let walk = walk_files(dir.path(), &[]);
        let extraction = extract_imports(&walk.files);
        let imported = collect_package_names(extraction.imports.iter().map(|i| i.text.as_str()));
        let used = resolve_used(&imported, &inventory.packages);

        let path = manifest_path(dir.path());
        write_manifest(&path, &used).unwrap();
        manifests.push(fs::read_to_string(&path).unwrap());
    }

    assert_eq!(manifests[0], manifests[1]);
    // imported-name order is sorted, so pyyaml resolves before requests
    assert_eq!(manifests[0], "PyYAML==6.0\nrequests==2.31.0\n");
}
