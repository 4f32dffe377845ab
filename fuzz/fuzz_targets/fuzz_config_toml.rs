#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz tool config parsing - this should never panic
        let _ = tsauto::config::parse_with_warnings(content, Path::new(".tsauto.toml"));
    }
});
