#![no_main]

use jsondom::{parse, stringify};
use libfuzzer_sys::fuzz_target;

// Feeds arbitrary text to the parser. Rejections must be clean errors;
// every accepted document must survive a serialize/parse round trip.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = parse(text) {
        let canonical = stringify(&value);
        let reparsed = parse(&canonical).expect("canonical text must reparse");
        assert_eq!(reparsed, value);
    }
});
