use std::path::PathBuf;
use weave_stats::commands::{render_summary, validate_args, validate_report_file, SummaryArgs};
use weave_stats::output::{write_report, WeavingReport};
use weave_stats::statistics::{
    AssemblyAccumulator, ClassAccumulator, Freeze, MethodAccumulator, ModuleAccumulator,
    WeavingOutcome, WeavingRecorder,
};

fn write_sample_report(dir: &std::path::Path) -> PathBuf {
    let mut method = MethodAccumulator::new("Run");
    method.record_attempt("App.Job::Run", &["Log"], WeavingOutcome::Succeeded);
    let mut class = ClassAccumulator::new("App.Job");
    class.add_method_statistics(method.freeze());
    let mut module = ModuleAccumulator::new("App.Core");
    module.add_class_statistics(class.freeze());
    let mut assembly = AssemblyAccumulator::new("App");
    assembly.add_module_statistics(module.freeze());

    let path = dir.join("report.json");
    write_report(&WeavingReport::new(assembly.freeze()), &path).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let args = SummaryArgs {
        report: PathBuf::from("report.json"),
        max_failures: 5,
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_too_many_failures() {
    let args = SummaryArgs {
        max_failures: 1_000_000,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_render_summary_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = SummaryArgs {
        report: write_sample_report(temp_dir.path()),
        ..Default::default()
    };

    let summary = render_summary(&args).unwrap();

    assert!(summary.contains("WEAVING REPORT: App"));
    assert!(summary.contains("App.Core"));
    assert!(summary.contains("App.Job"));
}

#[test]
fn test_validate_report_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_sample_report(temp_dir.path());

    assert!(validate_report_file(&path).is_ok());
    assert!(validate_report_file(&temp_dir.path().join("missing.json")).is_err());
}
