#![no_main]

use jsonecho::{Flags, Lexer, Status, Writer};
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes followed by EOF: the lexer may report any diagnostic,
// but it must never panic, and a result claiming bytes must always have a
// one-to-four byte view behind it.
fuzz_target!(|data: &[u8]| {
    let Some(mut lexer) = Lexer::new(16) else {
        return;
    };
    let mut writer = Writer::new();

    for byte in data.iter().copied().map(Some).chain([None]) {
        let result = lexer.read_byte(byte);

        if result.flags.contains(Flags::HAS_BYTES) {
            let view = lexer.bytes();
            assert!(!view.is_empty() && view.len() <= 4);
        }

        let _ = writer.write(result, lexer.bytes());

        if result.status != Status::Success {
            break;
        }
    }
});
