#![no_main]

use graphql_syntax::ParseOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(err) = graphql_syntax::parse(s, ParseOptions::default()) {
        let _ = err.format_detailed();
    }
    let _ = graphql_syntax::parse_value(s, ParseOptions::default());
    let _ = graphql_syntax::parse_type(s, ParseOptions::default());
});
