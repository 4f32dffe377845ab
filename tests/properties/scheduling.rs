//! Property tests for compile scheduling under both overlap policies.

use proptest::prelude::*;

use tsauto::infrastructure::memory::StaticWorkspace;
use tsauto::{ChangeEvent, OrchestratorOptions, OverlapPolicy};

use crate::common::Pipeline;

fn files() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop::sample::select(vec!["src/a.ts", "src/b.ts", "lib/c.ts", "d.ts"]),
        1..6,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with Overlap every source event launches exactly one compile.
    #[test]
    fn property_overlap_compiles_once_per_event(files in files()) {
        let options = OrchestratorOptions::default().with_overlap(OverlapPolicy::Overlap);
        let mut pipeline = Pipeline::start(StaticWorkspace::new("/proj"), options);

        for file in &files {
            pipeline.touch(ChangeEvent::changed(pipeline.path(file)));
        }
        pipeline.settle();

        let mut expected: Vec<String> = files
            .iter()
            .map(|f| format!("tsc /proj/{}", f))
            .collect();
        let mut commands = pipeline.runner.commands();
        expected.sort();
        commands.sort();
        prop_assert_eq!(commands, expected);
    }

    /// PROPERTY: with Coalesce a burst behind a running compile yields exactly
    /// one follow-up, for the last file of the burst.
    #[test]
    fn property_coalesce_burst_yields_one_follow_up(first in files(), burst in files()) {
        let mut pipeline =
            Pipeline::start(StaticWorkspace::new("/proj"), OrchestratorOptions::default());
        pipeline.runner.hold();

        pipeline.touch(ChangeEvent::changed(pipeline.path(&first[0])));
        // The held run must be registered by the runner before the burst.
        let registered = pipeline.pump_until(|p| {
            p.orchestrator.in_flight() == 1 && p.runner.commands().len() == 1
        });
        prop_assert!(registered);
        for file in &burst {
            pipeline.touch(ChangeEvent::changed(pipeline.path(file)));
        }
        prop_assert!(pipeline.pump_until(|p| p.orchestrator.has_pending()));
        prop_assert_eq!(pipeline.orchestrator.in_flight(), 1);
        prop_assert!(pipeline.orchestrator.has_pending());

        pipeline.runner.release_one();
        pipeline.runner.release_one();
        pipeline.settle();

        let last = burst.last().map(|f| format!("tsc /proj/{}", f));
        let commands = pipeline.runner.commands();
        prop_assert_eq!(commands.len(), 2);
        prop_assert_eq!(commands.get(1).cloned(), last);
    }
}
