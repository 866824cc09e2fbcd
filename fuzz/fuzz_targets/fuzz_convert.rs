#![no_main]

use libfuzzer_sys::fuzz_target;
use ttl2jsonld_core::OutputFormat;

// Accepts arbitrary bytes, feeds the UTF-8 ones to convert_str().
// Goal: no panics, even on malformed Turtle.
fuzz_target!(|data: &[u8]| {
    if let Ok(turtle) = std::str::from_utf8(data) {
        let _ = ttl2jsonld_core::convert_str(
            turtle,
            Some("http://example.org/fuzz/"),
            OutputFormat::Compact,
        );
    }
});
