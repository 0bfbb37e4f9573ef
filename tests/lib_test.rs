//! Library integration tests.

use memorai_setup::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::IncompatibleRuntime {
        found: "3.7.5".into(),
        required: "3.8".into(),
    };
    assert_eq!(
        err.to_string(),
        "Python 3.7.5 is not compatible. Need Python 3.8+"
    );
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> memorai_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use memorai_setup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["setup-local-ai", "probe", "--json"]);
    if let Some(Commands::Probe(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Probe command");
    }
}

#[test]
fn version_types_are_public() {
    use memorai_setup::runtime::{MinimumVersion, PythonVersion};

    let found = PythonVersion::parse_output("Python 3.12.1").unwrap();
    assert!(found.satisfies(&MinimumVersion::default()));
    assert!(!found.satisfies(&"3.13".parse::<MinimumVersion>().unwrap()));
}

#[test]
fn probe_payload_is_public() {
    use memorai_setup::probe::ModelProbeResult;

    let result =
        ModelProbeResult::from_stdout("[INFO] ...\n{\"status\": \"ready\", \"dimension\": 384}\n")
            .unwrap();
    assert!(result.is_ready());
    assert_eq!(result.dimension, Some(384));
}

#[test]
fn pipeline_runs_with_scripted_runner() {
    use memorai_setup::config::SetupConfig;
    use memorai_setup::pipeline::{local_ai_pipeline, PipelineOptions};
    use memorai_setup::shell::ScriptedRunner;
    use memorai_setup::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let runner = ScriptedRunner::new(|spec| {
        if spec.args.first().map(String::as_str) == Some("--version") {
            ScriptedRunner::ok("Python 3.11.4\n")
        } else {
            ScriptedRunner::ok("{\"status\": \"ready\", \"dimension\": 384}\n")
        }
    });
    let mut ui = MockUI::new();

    let result = local_ai_pipeline(
        &SetupConfig::default(),
        &runner,
        temp.path(),
        PipelineOptions::default(),
    )
    .run(&mut ui);

    assert!(result.success());
    assert_eq!(runner.calls().len(), 3);
    assert!(ui.has_success("Python 3.11.4 is compatible"));
}
