#![no_main]

use libfuzzer_sys::fuzz_target;

use mem_units::{format_size, Format, Size};

fuzz_target!(|bits: i64| {
    let size = Size::from_bits(bits);
    for format in Format::FORMATS {
        let formatted = size.display(*format).to_string();
        assert_eq!(Size::parse_str(&formatted), Ok(size), "{formatted}");
        assert_eq!(format_size(size, format.selector(), -1), formatted);
    }
});
