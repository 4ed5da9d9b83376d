#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfpages::config::PageRange;
use pdfpages::pages::PageFileName;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    // Anything that parses must print back to the same name
    if let Some(name) = PageFileName::parse(s) {
        assert_eq!(PageFileName::parse(&name.file_name()), Some(name));
    }

    if let Ok(range) = PageRange::parse(s) {
        assert_eq!(range.is_empty(), range.len() == 0);
        assert_eq!(PageRange::parse(&range.to_string()).ok(), Some(range));
    }
});
