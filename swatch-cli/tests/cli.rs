use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn build_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("web").join("tokens.css");
    let dart = dir.path().join("flutter").join("tokens.dart");

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("build")
        .arg(fixture_path("tokens.json"))
        .arg("--css-out")
        .arg(&css)
        .arg("--dart-out")
        .arg(&dart);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("written to"));

    assert_eq!(
        fs::read_to_string(&css).unwrap(),
        ":root {\n  --color-brand-primary: rgb(79, 70, 229);\n  --color-brand-primary-hover: rgb(79, 70, 229);\n  --color-text: rgb(17, 24, 39);\n  --space-grid: 12px;\n  --space-md: 16px;\n  --font-family-body: Inter,sans-serif;\n  --font-weight-bold: 700;\n}\n"
    );
    let dart = fs::read_to_string(&dart).unwrap();
    assert!(dart.starts_with("// GENERATED FILE. Do not edit by hand.\n"));
    assert!(dart.contains("  static const Color color_brand_primary = Color(0xFF4F46E5);\n"));
    assert!(dart.contains("  static const double space_grid = 12.00;\n"));
    assert!(dart.contains("  static const int font_weight_bold = 700;\n"));
    assert!(dart.contains("  static const String font_family_body = \"Inter,sans-serif\";\n"));
}

#[test]
fn reference_problems_are_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("tokens.css");

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("build")
        .arg(fixture_path("references.json"))
        .arg("--css-out")
        .arg(&css)
        .arg("--dart-out")
        .arg(dir.path().join("tokens.dart"));
    cmd.assert().success().stderr(
        predicate::str::contains("Circular reference detected: loop.b")
            .and(predicate::str::contains("Circular reference detected: loop.a"))
            .and(predicate::str::contains("Reference not found: missing.path")),
    );

    let css = fs::read_to_string(&css).unwrap();
    assert!(css.contains("  --loop-a: {loop.b};\n"));
    assert!(css.contains("  --promo: Save on {missing.path};\n"));
}

#[test]
fn missing_source_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path())
        .arg("build")
        .arg("nowhere.json");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing token source: nowhere.json"));

    assert!(!dir.path().join("web").exists());
}

#[test]
fn malformed_source_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path())
        .arg("build")
        .arg(fixture_path("malformed.json"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed token document"));
}

#[test]
fn project_config_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(fixture_path("tokens.json"), dir.path().join("design.json")).unwrap();
    fs::write(
        dir.path().join("swatch.toml"),
        "sources = [\"design.json\"]\n\n[output]\ncss = \"out/vars.css\"\ndart = \"out/brand.dart\"\n\n[dart]\nclass_name = \"BrandTokens\"\nsource_label = \"design.json\"\nscale_helper = true\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path()).arg("build");
    cmd.assert().success();

    assert!(dir.path().join("out/vars.css").exists());
    let dart = fs::read_to_string(dir.path().join("out/brand.dart")).unwrap();
    assert!(dart.contains("// Source: design.json\n"));
    assert!(dart.contains("class BrandTokens {\n"));
    assert!(dart.contains("class TokenScale {\n"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.current_dir(dir.path())
        .arg("build")
        .arg("--config")
        .arg("missing.toml");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn list_formats_names_every_format() {
    let mut cmd = cargo_bin_cmd!("swatch");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("css (.css)")
            .and(predicate::str::contains("dart (.dart)"))
            .and(predicate::str::contains("json (.json)")),
    );
}
