//! Integration tests for porous-store
//!
//! These tests read documents through the `DocumentSource` trait from files
//! and from BSON, without a running MongoDB server.

use mongodb::bson::{self, doc};
use porous_domain::{DocumentSource, MaterialDocument, PropertyValue};
use porous_store::{JsonLinesSource, MemorySource, StoreError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_json_lines_file_in_order() {
    let file = write_lines(&[
        r#"{"_id": {"$oid": "5301e1c6a1b2c3d4e5f60718"}, "snl_final": {"snlgroup_key": "SG1"}}"#,
        r#"{"snl_final": {"snlgroup_key": "SG2"}}"#,
        r#"{"snl_final": {"snlgroup_key": "SG3"}}"#,
    ]);

    let mut source = JsonLinesSource::open(file.path()).unwrap();
    let keys: Vec<String> = source
        .documents()
        .unwrap()
        .map(|doc| doc.unwrap().snlgroup_key().unwrap().to_string())
        .collect();

    assert_eq!(keys, vec!["SG1", "SG2", "SG3"]);
}

#[test]
fn test_json_lines_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = JsonLinesSource::open(dir.path().join("absent.jsonl"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_json_lines_bad_document_after_good_one() {
    let file = write_lines(&[
        r#"{"snl_final": {"snlgroup_key": "SG1"}}"#,
        r#"{"snl_final": {"snlgroup_key": 42}}"#,
    ]);

    let mut source = JsonLinesSource::open(file.path()).unwrap();
    let mut documents = source.documents().unwrap();

    let first = documents.next().unwrap().unwrap();
    assert_eq!(first.snlgroup_key(), Some("SG1"));
    assert!(matches!(documents.next(), Some(Err(StoreError::Decode(_)))));
    assert!(documents.next().is_none());
}

#[test]
fn test_memory_source_yields_clones() {
    let doc: MaterialDocument =
        serde_json::from_str(r#"{"snl_final": {"snlgroup_key": "SG1"}}"#).unwrap();
    let mut source = MemorySource::new(vec![doc.clone(), doc.clone()]);
    assert_eq!(source.len(), 2);

    let first_pass: Vec<_> = source.documents().unwrap().map(Result::unwrap).collect();
    let second_pass: Vec<_> = source.documents().unwrap().map(Result::unwrap).collect();
    assert_eq!(first_pass, vec![doc.clone(), doc.clone()]);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_bson_document_decodes_into_model() {
    let raw = doc! {
        "_id": bson::oid::ObjectId::new(),
        "porous": {
            "material_properties": {
                "surface_area_He": 1456.37,
                "density": 1754.5316328355,
                "di": 4.1829,
                "df": 3.44748,
                "pore_count": 3_i32,
                "framework": "ABW",
            },
            "thermo_parameters": [
                { "component": "CO2", "type": "henry_coefficient", "values": 2.5 },
                { "component": "N2", "type": "henry_coefficient", "values": 7_i64 },
            ],
        },
        "material_metadata": { "id": 1_i32, "formula": "Si8O16", "type": "zeo" },
        "snl_final": { "snlgroup_key": "SG1" },
    };

    let document: MaterialDocument = bson::from_document(raw).unwrap();

    assert_eq!(document.snlgroup_key(), Some("SG1"));
    let properties = document.material_properties().unwrap();
    assert_eq!(properties.get("density").and_then(|v| v.as_f64()), Some(1754.5316328355));
    assert_eq!(properties.get("pore_count").and_then(|v| v.as_f64()), Some(3.0));
    assert_eq!(
        properties.get("framework"),
        Some(&PropertyValue::Other(serde_json::json!("ABW")))
    );

    let thermo = document.thermo_parameters().unwrap();
    assert_eq!(thermo.len(), 2);
    assert_eq!(thermo[1].component.as_deref(), Some("N2"));
    assert_eq!(thermo[1].values.as_f64(), Some(7.0));
}

#[test]
fn test_bson_non_finite_doubles_survive_decode() {
    let raw = doc! {
        "porous": {
            "material_properties": {
                "surface_area_He": f64::NAN,
                "density": f64::INFINITY,
                "di": f64::NEG_INFINITY,
                "df": 3.44748,
            },
            "thermo_parameters": [
                { "component": "CO2", "type": "heat_of_adsorption", "values": f64::NAN },
                { "component": "CO2", "type": "henry_coefficient", "values": bson::Bson::Null },
            ],
        },
        "snl_final": { "snlgroup_key": "SG1" },
    };

    let document: MaterialDocument = bson::from_document(raw).unwrap();

    let properties = document.material_properties().unwrap();
    let value = |key: &str| properties.get(key).and_then(PropertyValue::as_f64);
    assert!(value("surface_area_He").unwrap().is_nan());
    assert_eq!(value("density"), Some(f64::INFINITY));
    assert_eq!(value("di"), Some(f64::NEG_INFINITY));
    assert_eq!(value("df"), Some(3.44748));

    let thermo = document.thermo_parameters().unwrap();
    assert!(thermo[0].values.as_f64().unwrap().is_nan());
    assert_eq!(thermo[1].values, PropertyValue::Null);
}

#[test]
fn test_json_lines_extended_json_doubles() {
    let file = write_lines(&[
        r#"{"porous": {"material_properties": {"density": {"$numberDouble": "-Infinity"}}}}"#,
    ]);

    let mut source = JsonLinesSource::open(file.path()).unwrap();
    let document = source.documents().unwrap().next().unwrap().unwrap();

    let density = document.material_properties().unwrap().get("density").unwrap();
    assert_eq!(density.as_f64(), Some(f64::NEG_INFINITY));
}
