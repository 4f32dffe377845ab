//! Property tests for watch target and exclude matching.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use tsauto::infrastructure::ExcludeSet;
use tsauto::WatchTarget;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,8}").unwrap()
}

fn dirs() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=4)
}

fn under(root: &Path, dirs: &[String], file: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for dir in dirs {
        path.push(dir);
    }
    path.push(file);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the default source glob matches `.ts` files at any depth,
    /// whatever the extension's case.
    #[test]
    fn property_sources_match_ts_at_any_depth(
        dirs in dirs(),
        stem in segment(),
        ext in prop::sample::select(vec!["ts", "TS", "Ts"]),
    ) {
        let root = Path::new("/proj");
        let target = WatchTarget::pattern("**/*.ts").unwrap();
        let path = under(root, &dirs, &format!("{}.{}", stem, ext));
        prop_assert!(target.matches(root, &path));
    }

    /// PROPERTY: other extensions never match the source glob.
    #[test]
    fn property_sources_ignore_other_extensions(
        dirs in dirs(),
        stem in segment(),
        ext in prop::sample::select(vec!["js", "tsx", "json", "map", "d"]),
    ) {
        let root = Path::new("/proj");
        let target = WatchTarget::pattern("**/*.ts").unwrap();
        let path = under(root, &dirs, &format!("{}.{}", stem, ext));
        prop_assert!(!target.matches(root, &path));
    }

    /// PROPERTY: the config glob only matches files named exactly tsconfig.json.
    #[test]
    fn property_config_glob_is_exact_file_name(dirs in dirs(), stem in segment()) {
        let root = Path::new("/proj");
        let target = WatchTarget::pattern("**/tsconfig.json").unwrap();
        prop_assert!(target.matches(root, &under(root, &dirs, "tsconfig.json")));
        let other = format!("{}.json", stem);
        prop_assume!(!other.eq_ignore_ascii_case("tsconfig.json"));
        prop_assert!(!target.matches(root, &under(root, &dirs, &other)));
    }

    /// PROPERTY: anything below node_modules is excluded by default.
    #[test]
    fn property_node_modules_is_always_excluded(
        before in dirs(),
        after in dirs(),
        stem in segment(),
    ) {
        let root = Path::new("/proj");
        let mut dirs = before;
        dirs.push("node_modules".to_string());
        dirs.extend(after);
        let path = under(root, &dirs, &format!("{}.ts", stem));
        prop_assert!(ExcludeSet::default().is_excluded(root, &path));
    }

    /// PROPERTY: sources outside excluded trees are never excluded.
    #[test]
    fn property_plain_sources_are_not_excluded(dirs in dirs(), stem in segment()) {
        prop_assume!(!dirs.iter().any(|d| d == "node_modules"));
        let root = Path::new("/proj");
        let path = under(root, &dirs, &format!("{}.ts", stem));
        prop_assert!(!ExcludeSet::default().is_excluded(root, &path));
    }
}
