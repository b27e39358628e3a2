#![no_main]

use lesslint::checker::{CheckOptions, Checker};
use lesslint::rules::default_property_order;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (may fail for invalid UTF-8, that's fine)
    if let Ok(input) = std::str::from_utf8(data) {
        let table = default_property_order();
        let options = CheckOptions { fix: true, debug: false };
        let report = Checker::new(options, &table).run(input);
        // The checker is total and line-preserving for any input
        assert_eq!(
            report.fixed_source.split('\n').count(),
            input.split('\n').count()
        );
    }
});
