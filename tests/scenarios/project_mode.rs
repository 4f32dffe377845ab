//! Scenario: workspace with tsconfig.json
//!
//! Journey: a developer edits sources and the project config.
//!
//! Success Criteria:
//! - every source edit rebuilds the whole project
//! - editing tsconfig.json rebuilds with the same config path

use tsauto::infrastructure::FsWorkspace;
use tsauto::{ChangeEvent, OrchestratorOptions};

use crate::common::*;

#[test]
fn scenario_edit_with_config_compiles_the_project() {
    let env = TestEnv::new();
    env.write_project_file("tsconfig.json", TSCONFIG);
    env.write_project_file("src/a.ts", SOURCE_A);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    let config = pipeline.path("tsconfig.json");
    assert_eq!(pipeline.orchestrator.config_path(), Some(config.as_path()));
    assert_eq!(pipeline.surfaces.notifications().len(), 1);

    pipeline.touch(ChangeEvent::changed(pipeline.path("src/a.ts")));
    pipeline.settle();

    assert_eq!(
        pipeline.runner.commands(),
        vec![format!("tsc -p \"{}\"", config.display())]
    );
}

#[test]
fn scenario_config_edit_recompiles_without_moving_the_slot() {
    let env = TestEnv::new();
    env.write_project_file("tsconfig.json", TSCONFIG);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    let config = pipeline.path("tsconfig.json");

    pipeline.touch(ChangeEvent::changed(&config));
    pipeline.settle();

    assert_eq!(pipeline.orchestrator.config_path(), Some(config.as_path()));
    assert_eq!(
        pipeline.runner.commands(),
        vec![format!("tsc -p \"{}\"", config.display())]
    );
}

#[test]
fn scenario_config_created_mid_session_switches_mode() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);
    env.write_project_file("src/b.ts", SOURCE_B);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    let a = pipeline.path("src/a.ts");
    pipeline.touch(ChangeEvent::changed(&a));
    pipeline.settle();

    env.write_project_file("tsconfig.json", TSCONFIG);
    let config = pipeline.path("tsconfig.json");
    pipeline.touch(ChangeEvent::created(&config));
    pipeline.touch(ChangeEvent::changed(pipeline.path("src/b.ts")));
    pipeline.settle();

    assert_eq!(
        pipeline.runner.commands(),
        vec![
            format!("tsc {}", a.display()),
            format!("tsc -p \"{}\"", config.display()),
        ]
    );
}
