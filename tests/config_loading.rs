use std::io::Write;

use tempfile::NamedTempFile;
use varname::{
    derive_unique_names, Alignment, Casing, ConfigLoadError, NameRegistry, Normalizer,
    VarNameConfig,
};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_policy_from_file() {
    let file = write_config(
        r#"
version: "1.0"
name: reports
naming:
  max_length: 20
  alignment: right
  casing: kebab
"#,
    );
    let cfg = VarNameConfig::from_file(file.path()).expect("config loads");
    let naming = cfg.naming_config();
    assert_eq!(naming.alignment, Alignment::Right);
    assert_eq!(naming.casing, Casing::Kebab);

    let normalizer = Normalizer::new(&naming).expect("valid");
    assert_eq!(
        normalizer
            .normalize("220 BEA EconData Employment 2010-2015")
            .unwrap(),
        "employment-2010-2015"
    );
}

#[test]
fn custom_stop_words_replace_defaults() {
    let file = write_config(
        r#"
version: "1"
naming:
  stop_words: [bea]
"#,
    );
    let naming = VarNameConfig::from_file(file.path())
        .expect("config loads")
        .naming_config();
    let normalizer = Normalizer::new(&naming).expect("valid");
    assert_eq!(
        normalizer.normalize("The BEA Report").unwrap(),
        "the_report"
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.yaml");
    let err = VarNameConfig::from_file(&path).unwrap_err();
    assert!(matches!(&err, ConfigLoadError::Read { path: p, .. } if *p == path));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let file = write_config("version: [unterminated\n");
    let err = VarNameConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::YamlParse(_)));
}

#[test]
fn batch_derivation_keeps_names_unique() {
    let normalizer = Normalizer::new(&VarNameConfig::default().naming_config()).expect("valid");
    let mut registry: NameRegistry = ["employment_2010"].into_iter().collect();

    let names = derive_unique_names(
        [
            "Employment 2010",
            "EMPLOYMENT (2010)",
            "Employment, 2010.",
            "Wages 2010",
        ],
        &normalizer,
        &mut registry,
    )
    .expect("all titles normalize");

    // a trailing `_2010` already reads as a numeric suffix
    assert_eq!(
        names,
        vec![
            "employment_2011",
            "employment_2012",
            "employment_2013",
            "wages_2010",
        ]
    );
    assert_eq!(registry.len(), 5);
}
