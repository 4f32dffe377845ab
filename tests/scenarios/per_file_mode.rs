//! Scenario: workspace without tsconfig.json
//!
//! Journey: a developer edits a loose TypeScript file.
//!
//! Success Criteria:
//! - the compiler runs on the edited file only
//! - the log ends with the success line
//! - the indicator is back to watching

use tsauto::infrastructure::FsWorkspace;
use tsauto::{ChangeEvent, CompilePhase, OrchestratorOptions};

use crate::common::*;

#[test]
fn scenario_edit_without_config_compiles_the_file() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    assert!(pipeline.orchestrator.config_path().is_none());
    assert!(pipeline.surfaces.notifications().is_empty());

    let file = pipeline.path("src/a.ts");
    pipeline.touch(ChangeEvent::changed(&file));
    pipeline.settle();

    assert_eq!(
        pipeline.runner.commands(),
        vec![format!("tsc {}", file.display())]
    );
    assert_eq!(pipeline.runner.working_dirs(), vec![pipeline.root().to_path_buf()]);

    let log = pipeline.surfaces.log_lines();
    assert_eq!(log.first().map(String::as_str), Some("Auto compiling file 'a.ts'"));
    assert_eq!(
        log.iter().rev().find(|l| !l.is_empty()).map(String::as_str),
        Some("TypeScript auto compilation succeeded.")
    );
    assert_eq!(pipeline.orchestrator.phase(), CompilePhase::Watching);
    assert_eq!(
        pipeline.surfaces.indicator().map(|i| i.text),
        Some("TS [ON]".to_string())
    );
}

#[test]
fn scenario_files_under_node_modules_are_not_configs() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);
    env.write_project_file("node_modules/lib/tsconfig.json", TSCONFIG);

    let pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());

    assert!(pipeline.orchestrator.config_path().is_none());
}
