#![no_main]

use libfuzzer_sys::fuzz_target;

use lambda_tasks::config::{RawConfig, TargetConfig};
use lambda_tasks::ExecutionMode;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and resolution should never panic, whatever the format
        for raw in [
            toml::from_str::<RawConfig>(content).ok(),
            serde_json::from_str::<RawConfig>(content).ok(),
        ]
        .into_iter()
        .flatten()
        {
            let _ = TargetConfig::from_raw(raw, "fuzz", ExecutionMode::Production);
        }
    }
});
