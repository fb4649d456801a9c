#![no_main]

use libfuzzer_sys::fuzz_target;
use return_data_client::{decode, Primitive, ReturnType};

fuzz_target!(|data: &[u8]| {
    let shapes = [
        ReturnType::Primitive(Primitive::U64),
        ReturnType::Primitive(Primitive::I8),
        ReturnType::Vector(Primitive::I32),
        ReturnType::Vector(Primitive::U64),
        ReturnType::Struct(vec![
            ("a".to_string(), Primitive::U64),
            ("b".to_string(), Primitive::I16),
        ]),
    ];
    for shape in &shapes {
        let _ = decode(data, shape);
    }
});
