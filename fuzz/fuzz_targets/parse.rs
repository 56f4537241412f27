#![no_main]

use libfuzzer_sys::fuzz_target;
use typehint::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        match parser::parse_type(s) {
            // Accepted hints render back to exactly their input
            Ok(tree) => assert_eq!(tree.to_string(), s),
            Err(err) => assert!(err.span().end <= s.len()),
        }
    }
});
