#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{sample_web_api, task_of, trimmed_lines, CONTRACTS};
use ifacegen::generator::{generate_interfaces, synthesize_all, GenerationOptions, WriteOutcome};
use ifacegen::GeneratorConfig;
use std::fs;

fn employees_source() -> String {
    let (artifacts, issues, _) = synthesize_all(&sample_web_api(), &GeneratorConfig::default()).unwrap();
    assert!(issues.is_empty());
    artifacts
        .into_iter()
        .find(|a| a.interface_name == "IEmployeesController")
        .unwrap()
        .source
}

#[test]
fn test_one_artifact_per_controller_in_discovery_order() {
    let (artifacts, _, _) = synthesize_all(&sample_web_api(), &GeneratorConfig::default()).unwrap();
    let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "IEmployeesController.generated.cs",
            "ISampleController.generated.cs"
        ]
    );
}

#[test]
fn test_employees_interface_header() {
    let source = employees_source();
    let lines = trimmed_lines(&source);
    assert_eq!(
        &lines[..6],
        &[
            "using RestEase;",
            "namespace RestEase.SampleWebApi.Controllers",
            "{",
            "[BasePath(\"Employees\")]",
            "public interface IEmployeesController",
            "{",
        ]
    );
    assert!(source.contains("\n\t[BasePath(\"Employees\")]\n\tpublic interface IEmployeesController\n"));
}

#[test]
fn test_employees_signatures() {
    let source = employees_source();
    let lines = trimmed_lines(&source);
    let expected = [
        "[Get]".to_string(),
        format!(
            "{} GetEmployees();",
            task_of(&format!("global::System.Collections.Generic.IEnumerable<{CONTRACTS}.Employee>"))
        ),
        "[Get(\"{id}\")]".to_string(),
        format!("{} GetEmployee([Path] int id);", task_of(&format!("{CONTRACTS}.Employee"))),
        "[Get(\"bulk\")]".to_string(),
        format!(
            "{} GetEmployeeByRequest([Query(QuerySerializationMethod.Serialized)] {CONTRACTS}.BulkRequest bulkRequest);",
            task_of(&format!("{CONTRACTS}.BulkRequest"))
        ),
        "[Post]".to_string(),
        format!(
            "{} CreateEmployee([Body] {CONTRACTS}.Employee employee);",
            task_of("int")
        ),
        "[Put(\"{id}\")]".to_string(),
        format!(
            "global::System.Threading.Tasks.Task UpdateEmployee([Path] int id, [Body] {CONTRACTS}.Employee employee);"
        ),
        "[Delete(\"{id}\")]".to_string(),
        "global::System.Threading.Tasks.Task DeleteEmployee([Path] int id);".to_string(),
        "[Delete(\"deleteEmployeeFromQuery\")]".to_string(),
        format!(
            "global::System.Threading.Tasks.Task DeleteEmployeeFromQuery([Query(QuerySerializationMethod.Serialized)] {CONTRACTS}.Employee employee);"
        ),
        "[Get(\"byEnumFromQuery\")]".to_string(),
        format!(
            "{} GetByEnumFromQuery([Query(\"filter\", QuerySerializationMethod.Serialized)] {CONTRACTS}.MyEnum myEnum);",
            task_of(&format!("{CONTRACTS}.MyEnum"))
        ),
        "[Get(\"byEnum/{myEnum}\")]".to_string(),
        format!(
            "{} GetByEnumFromRoute([Path] {CONTRACTS}.MyEnum myEnum);",
            task_of(&format!("{CONTRACTS}.MyEnum"))
        ),
        "[Get(\"ByEnumFromRequest\")]".to_string(),
        format!(
            "{} GetByEnumFromRequest([Query(QuerySerializationMethod.Serialized)] {CONTRACTS}.EnumRequest myEnumRequest);",
            task_of(&format!("{CONTRACTS}.MyEnum"))
        ),
        "[Get(\"{id}/download\")]".to_string(),
        format!("{} Download([Path] int id);", task_of(&format!("{CONTRACTS}.FileContent"))),
        "[Post(\"upload\")]".to_string(),
        format!(
            "{} Upload([Body] {CONTRACTS}.FileContent downloadable);",
            task_of("int")
        ),
        "}".to_string(),
        "}".to_string(),
    ];
    assert_eq!(&lines[6..], &expected.iter().map(String::as_str).collect::<Vec<_>>()[..]);
}

#[test]
fn test_blank_line_before_each_signature() {
    let source = employees_source();
    assert!(source.contains("\t{\n\n\t\t[Get]\n"));
    assert!(source.contains(";\n\n\t\t[Get(\"{id}\")]\n"));
}

#[test]
fn test_sample_controller_skips_constructor() {
    let (artifacts, _, dropped) = synthesize_all(&sample_web_api(), &GeneratorConfig::default()).unwrap();
    let sample = &artifacts[1].source;
    assert!(sample.contains("[BasePath(\"Sample\")]"));
    assert!(sample.contains(&format!("{} GetSampleValue();", task_of("string"))));
    assert!(!sample.contains("sampleService"));
    assert_eq!(dropped, 0);
}

#[test]
fn test_generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let table = sample_web_api();
    let config = GeneratorConfig::default();
    let options = GenerationOptions {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let first = generate_interfaces(&table, &config, &options).unwrap();
    assert_eq!(first.count(WriteOutcome::Written), 2);
    let before = fs::read(dir.path().join("IEmployeesController.generated.cs")).unwrap();

    let second = generate_interfaces(&table, &config, &options).unwrap();
    assert_eq!(second.count(WriteOutcome::Unchanged), 2);
    let after = fs::read(dir.path().join("IEmployeesController.generated.cs")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_sequential_and_parallel_output_match() {
    let table = sample_web_api();
    let parallel = synthesize_all(&table, &GeneratorConfig::default()).unwrap().0;
    let sequential = synthesize_all(
        &table,
        &GeneratorConfig {
            parallel: false,
            ..Default::default()
        },
    )
    .unwrap()
    .0;
    assert_eq!(parallel, sequential);
}

#[test]
fn test_custom_catalog_selects_other_framework() {
    let snapshot = r#"
references:
  - { namespace: Web, name: Endpoint }
  - { namespace: Web, name: Get }
declarations:
  - namespace: App
    name: PingController
    visibility: public
    base: Web.Endpoint
    methods:
      - name: Ping
        visibility: public
        returns: string
        markers: [{ type: Web.Get, args: ["ping"] }]
"#;
    let table = ifacegen::symbols::parse_declarations(snapshot, ifacegen::symbols::SnapshotFormat::Yaml)
        .unwrap();
    let mut config = GeneratorConfig::default();
    config.markers.service_base = "Web.Endpoint".into();
    config.markers.http_get = "Web.Get".into();

    let (artifacts, issues, _) = synthesize_all(&table, &config).unwrap();
    assert_eq!(issues.len(), 11);
    assert!(artifacts[0].source.contains("[Get(\"ping\")]"));
    assert!(artifacts[0].source.contains("string Ping();"));
    assert!(!artifacts[0].source.contains("BasePath"));
}
