//! Property tests for the config slot.

use std::path::PathBuf;

use proptest::prelude::*;

use tsauto::infrastructure::memory::RecordingSurfaces;
use tsauto::{ChangeEvent, ChangeKind, ConfigResolver, ConfigState, StatusReporter};

fn reporter() -> StatusReporter {
    StatusReporter::new(RecordingSurfaces::new().bundle())
}

fn kind() -> impl Strategy<Value = ChangeKind> {
    prop::sample::select(vec![ChangeKind::Created, ChangeKind::Changed, ChangeKind::Deleted])
}

fn config_path() -> impl Strategy<Value = PathBuf> {
    prop::sample::select(vec![
        PathBuf::from("/proj/tsconfig.json"),
        PathBuf::from("/proj/app/tsconfig.json"),
        PathBuf::from("/proj/lib/tsconfig.json"),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Changed never moves the slot, whatever state it is in.
    #[test]
    fn property_changed_never_mutates(
        initial in prop::option::of(config_path()),
        changed in config_path(),
    ) {
        let mut status = reporter();
        let mut resolver = ConfigResolver::new();
        resolver.apply_discovery(initial.clone().into_iter().collect(), &mut status);
        let before = resolver.state().clone();

        resolver.on_event(&ChangeEvent::changed(changed), &mut status);

        prop_assert_eq!(resolver.state(), &before);
    }

    /// PROPERTY: the slot always reflects the last Created or Deleted event.
    #[test]
    fn property_last_created_or_deleted_wins(
        events in proptest::collection::vec((kind(), config_path()), 1..24),
    ) {
        let mut status = reporter();
        let mut resolver = ConfigResolver::new();
        for (kind, path) in &events {
            resolver.on_event(&ChangeEvent::new(path.clone(), *kind), &mut status);
        }

        let expected = events
            .iter()
            .rev()
            .find(|(kind, _)| *kind != ChangeKind::Changed)
            .map(|(kind, path)| match kind {
                ChangeKind::Created => ConfigState::Path(path.clone()),
                _ => ConfigState::Absent,
            })
            .unwrap_or(ConfigState::Absent);
        prop_assert_eq!(resolver.state(), &expected);
    }

    /// PROPERTY: once an event has been applied, a late discovery result is dropped.
    #[test]
    fn property_late_discovery_never_overrides_events(
        created in config_path(),
        found in proptest::collection::vec(config_path(), 0..4),
    ) {
        let mut status = reporter();
        let mut resolver = ConfigResolver::new();
        resolver.on_event(&ChangeEvent::created(created.clone()), &mut status);
        resolver.apply_discovery(found, &mut status);

        prop_assert_eq!(resolver.state(), &ConfigState::Path(created));
    }
}
