//! Scenario: the compiler reports errors
//!
//! Journey: a developer saves a file with a syntax error, then fixes it.
//!
//! Success Criteria:
//! - the log holds the failure message and the compiler's output
//! - the indicator shows the error state
//! - the next save is accepted and clears the error

use tsauto::domain::ports::ProcessOutput;
use tsauto::infrastructure::memory::SurfaceCall;
use tsauto::infrastructure::FsWorkspace;
use tsauto::{ChangeEvent, CompilePhase, OrchestratorOptions};

use crate::common::*;

#[test]
fn scenario_failure_then_fix() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    pipeline
        .runner
        .push(ProcessOutput::failure(2, "", TSC_SYNTAX_ERROR))
        .push(ProcessOutput::success(""));
    let file = pipeline.path("src/a.ts");

    // Step 1: broken save
    pipeline.touch(ChangeEvent::changed(&file));
    pipeline.settle();

    let log = pipeline.surfaces.log_lines();
    let failure = format!("Command failed: tsc {} (exit code 2)", file.display());
    assert!(log.contains(&failure), "log was {:?}", log);
    assert!(log.contains(&TSC_SYNTAX_ERROR.to_string()));
    assert_eq!(pipeline.orchestrator.phase(), CompilePhase::Failed);
    assert_eq!(
        pipeline.surfaces.indicator().map(|i| i.text),
        Some("TS [ERR]".to_string())
    );
    assert_eq!(pipeline.surfaces.reveal_count(), 1);
    assert!(pipeline
        .surfaces
        .calls()
        .iter()
        .any(|c| matches!(c, SurfaceCall::Transient(text, _) if *text == failure)));

    // Step 2: fixed save is accepted
    pipeline.touch(ChangeEvent::changed(&file));
    pipeline.settle();

    assert_eq!(pipeline.runner.commands().len(), 2);
    assert_eq!(pipeline.orchestrator.phase(), CompilePhase::Watching);
    assert_eq!(
        pipeline.surfaces.log_lines().last().map(String::as_str),
        Some("")
    );
}

#[test]
fn scenario_missing_compiler_is_reported_not_fatal() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    pipeline.runner.push_spawn_failure("tsc: not found");

    pipeline.touch(ChangeEvent::changed(pipeline.path("src/a.ts")));
    pipeline.settle();

    assert_eq!(pipeline.orchestrator.phase(), CompilePhase::Failed);
    assert!(!pipeline.orchestrator.is_disposed());
    assert!(pipeline
        .surfaces
        .log_lines()
        .iter()
        .any(|l| l.contains("tsc: not found")));
}
