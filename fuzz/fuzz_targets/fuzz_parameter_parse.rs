#![no_main]

use libfuzzer_sys::fuzz_target;
use valmsg::{Magnitude, NumberFormat, PluralCategory, PluralRule};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if raw.len() > 4096 {
        return;
    }

    // Parsing must never panic.
    let Ok(magnitude) = Magnitude::parse(raw) else {
        return;
    };

    // Accepted input is exactly: optional sign, digits, optional '.' digits.
    let (_, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    assert_eq!(magnitude.decimal_digits(), fraction.len());
    assert!(magnitude.value().is_finite());

    // Rendering reproduces the written digits.
    let rendered = NumberFormat::RUSSIAN.format(&magnitude);
    let written: String = raw.chars().filter(char::is_ascii_digit).collect();
    let shown: String = rendered.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(
        shown.trim_start_matches('0'),
        written.trim_start_matches('0'),
        "{raw} -> {rendered}"
    );
    match rendered.split_once(',') {
        Some((_, digits)) => assert_eq!(digits.len(), fraction.len()),
        None => assert!(fraction.is_empty(), "{raw} -> {rendered}"),
    }

    // Fractions are never One under the Slavic rule.
    if !fraction.is_empty() {
        assert_eq!(PluralRule::Slavic.select(&magnitude), PluralCategory::Other);
    }
});
