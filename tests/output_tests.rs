use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;
use weave_stats::output::{
    generate_text_summary, read_report, report_to_string, validate_path, write_report,
    WeavingReport,
};
use weave_stats::statistics::{
    AssemblyAccumulator, AssemblyStatistics, ClassAccumulator, FailureCause, Freeze,
    MethodAccumulator, ModuleAccumulator, PropertyAccumulator, WeavingOutcome, WeavingRecorder,
};
use weave_stats::utils::config::SCHEMA_VERSION;

fn create_test_statistics() -> AssemblyStatistics {
    let mut method = MethodAccumulator::new("Save");
    method.record_attempt("App.Repo::Save", &["Tx", "Log"], WeavingOutcome::Succeeded);
    method.record_attempt("App.Repo::Save", &["Cache"], WeavingOutcome::failed("advice Cache incompatible"));

    let mut property = PropertyAccumulator::new("Count");
    property
        .setter_container()
        .record_attempt("App.Repo::Count.set", &["Log"], WeavingOutcome::failed("setter is private"));

    let mut class = ClassAccumulator::new("App.Repo");
    class.add_method_statistics(method.freeze());
    class.add_property_statistics(property.freeze());

    let mut module = ModuleAccumulator::new("App.Data");
    module.add_class_statistics(class.freeze());

    let mut assembly = AssemblyAccumulator::new("App");
    assembly.add_module_statistics(module.freeze());
    assembly.freeze()
}

#[test]
fn test_write_and_read_report() {
    let report = WeavingReport::new(create_test_statistics());
    let temp_file = NamedTempFile::new().unwrap();

    write_report(&report, temp_file.path()).unwrap();
    let loaded = read_report(temp_file.path()).unwrap();

    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.generated_at, report.generated_at);
    assert_eq!(loaded.statistics, report.statistics);
}

#[test]
fn test_report_json_shape() {
    let mut assembly = AssemblyAccumulator::new("App");
    assembly.set_fatal_exception(FailureCause::new("cannot load")).unwrap();
    let report = WeavingReport::new(assembly.freeze());

    let json: serde_json::Value = serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

    assert_eq!(json["version"], SCHEMA_VERSION);
    assert_eq!(json["statistics"]["name"], "App");
    assert_eq!(json["statistics"]["fatal_exception"]["message"], "cannot load");
    assert!(json["statistics"]["modules"].as_array().unwrap().is_empty());
}

#[test]
fn test_report_without_fatal_omits_field() {
    let report = WeavingReport::new(create_test_statistics());
    let json: serde_json::Value = serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

    assert!(json["statistics"].get("fatal_exception").is_none());
    let records = &json["statistics"]["modules"][0]["classes"][0]["methods"][0]["records"];
    assert_eq!(records[0]["advice"], serde_json::json!(["Tx", "Log"]));
    assert_eq!(records[1]["outcome"]["status"], "failed");
}

#[test]
fn test_read_malformed_report() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_text_summary_includes_accessor_failures() {
    let summary = generate_text_summary(&create_test_statistics(), 10);

    assert!(summary.contains("Modules: 1 | Classes: 1 | Methods: 1 | Properties: 1"));
    assert!(summary.contains("- App.Repo::Save: advice Cache incompatible"));
    assert!(summary.contains("- App.Repo::Count.set: setter is private"));
}
