// fuzz/fuzz_targets/fuzz_cli_input.rs
#![no_main]

use libfuzzer_sys::fuzz_target;
use nanofmt::config::ValueKind;
use nanofmt::input::parse_value;

// Value parsing must never panic, whatever the text; accepted values must format.
fuzz_target!(|data: &str| {
    for kind in [ValueKind::Duration, ValueKind::Size] {
        if let Ok(v) = parse_value(kind, data) {
            let out = match kind {
                ValueKind::Duration => nanofmt::format_duration(v),
                ValueKind::Size => nanofmt::format_size(v),
            };
            assert!(!out.is_empty());
        }
    }
});
