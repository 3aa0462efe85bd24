#![no_main]

use graphql_syntax::Lexer;
use graphql_syntax::token::GraphQLTokenKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut lexer = Lexer::new(s);
    while let Ok(token) = lexer.advance() {
        assert!(token.end <= s.len());
        if token.kind == GraphQLTokenKind::Eof {
            break;
        }
    }
});
