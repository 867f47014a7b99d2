#![no_main]

use libfuzzer_sys::fuzz_target;

use mem_units::{math, Size};

fuzz_target!(|pair: (i64, i64)| {
    let (left, right) = pair;
    let (a, b) = (Size::from_bits(left), Size::from_bits(right));
    for value in [a + b, a - b, a * right, -a, a.abs(), a.round(b), a.truncate(b)] {
        assert_ne!(value.as_bits(), i64::MIN);
    }
    if let Some(sum) = a.as_bits().checked_add(b.as_bits()) {
        if sum != i64::MIN {
            assert_eq!((a + b).as_bits(), sum);
        }
    }
    if b > Size::ZERO {
        assert_eq!(a.truncate(b) % b, Size::ZERO);
        assert!(a.truncate(b).abs() <= a.abs());
        let rounded = a.round(b);
        if rounded != Size::MAX && rounded != Size::MIN {
            assert_eq!(rounded % b, Size::ZERO);
        }
    }
    assert_eq!(math::abs(math::abs(left)), math::abs(left));
});
