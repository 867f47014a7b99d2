#![no_main]

use libfuzzer_sys::fuzz_target;

use mem_units::{Bandwidth, Size};

fuzz_target!(|data: &str| {
    let _ = Size::parse_str(data);
    let _ = Bandwidth::parse_str(data);
});
