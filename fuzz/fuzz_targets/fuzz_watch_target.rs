#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(glob) = std::str::from_utf8(data) {
        // Building and matching a target should never panic
        if let Ok(target) = tsauto::WatchTarget::pattern(glob) {
            let root = Path::new("/proj");
            let _ = target.key();
            let _ = target.matches(root, &root.join("src/a.ts"));
            let _ = target.matches(root, Path::new("/elsewhere/a.ts"));
        }
    }
});
