//! Scenario: tsconfig.json is deleted during a session
//!
//! Success Criteria:
//! - the removal is announced
//! - the next edit compiles the single file again

use tsauto::infrastructure::FsWorkspace;
use tsauto::{ChangeEvent, ConfigState, OrchestratorOptions};

use crate::common::*;

#[test]
fn scenario_config_deleted_falls_back_to_single_file() {
    let env = TestEnv::new();
    env.write_project_file("tsconfig.json", TSCONFIG);
    env.write_project_file("src/a.ts", SOURCE_A);

    let mut pipeline = Pipeline::start(FsWorkspace::new(env.root()), OrchestratorOptions::default());
    let config = pipeline.path("tsconfig.json");
    assert!(pipeline.orchestrator.config_path().is_some());

    std::fs::remove_file(&config).unwrap();
    pipeline.touch(ChangeEvent::deleted(&config));
    pipeline.settle();

    assert_eq!(pipeline.orchestrator.config_state(), &ConfigState::Absent);
    assert!(pipeline
        .surfaces
        .notifications()
        .iter()
        .any(|n| n.contains("was removed")));
    assert!(pipeline.runner.commands().is_empty());

    let file = pipeline.path("src/a.ts");
    pipeline.touch(ChangeEvent::changed(&file));
    pipeline.settle();

    assert_eq!(
        pipeline.runner.commands(),
        vec![format!("tsc {}", file.display())]
    );
}
