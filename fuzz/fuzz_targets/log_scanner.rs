#![no_main]

use libfuzzer_sys::fuzz_target;
use return_data_client::find_return_entry;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let _ = find_return_entry(&lines, "FuzzTargetProgram1111111111111111111111111");
    }
});
