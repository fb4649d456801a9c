use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use return_data_client::{decode, find_return_entry, parse_interface, Primitive, ReturnType};

const PROGRAM: &str = "BJYS8QEhSCk4pgtn6oArSEYNScMeTJmrNCVAzsEHaba3";

fn bench_log_scan(c: &mut Criterion) {
    // A realistic ladder: noise lines with the return entry near the end.
    let mut lines: Vec<String> = vec![format!("Program {} invoke [1]", PROGRAM)];
    for i in 0..200 {
        lines.push(format!("Program log: step {}", i));
    }
    lines.push(format!(
        "Program return: {} {}",
        PROGRAM,
        BASE64.encode(30u64.to_le_bytes())
    ));
    lines.push(format!("Program {} success", PROGRAM));

    c.bench_function("log_scan_200_lines", |b| {
        b.iter(|| {
            let entry = find_return_entry(black_box(&lines), black_box(PROGRAM)).unwrap();
            black_box(entry);
        })
    });
}

fn bench_vector_decode(c: &mut Criterion) {
    let mut payload = (1000i32).to_le_bytes().to_vec();
    for i in 0..1000i32 {
        payload.extend_from_slice(&i.to_le_bytes());
    }
    let ty = ReturnType::Vector(Primitive::I32);

    c.bench_function("vector_decode_1000_i32", |b| {
        b.iter(|| {
            let value = decode(black_box(&payload), black_box(&ty)).unwrap();
            black_box(value);
        })
    });
}

fn bench_struct_decode(c: &mut Criterion) {
    let fields: Vec<(String, Primitive)> = (0..16)
        .map(|i| (format!("field_{}", i), Primitive::U64))
        .collect();
    let payload = vec![0u8; 16 * 8];
    let ty = ReturnType::Struct(fields);

    c.bench_function("struct_decode_16_fields", |b| {
        b.iter(|| {
            let value = decode(black_box(&payload), black_box(&ty)).unwrap();
            black_box(value);
        })
    });
}

fn bench_interface_parse(c: &mut Criterion) {
    let idl = r#"{
        "instructions": [
            {
                "name": "returnU64",
                "accounts": [{"name": "account", "isMut": false, "isSigner": false}],
                "returns": "u64"
            },
            {
                "name": "returnVec",
                "accounts": [{"name": "account", "isMut": false, "isSigner": false}],
                "returns": {"vec": "i32"}
            }
        ]
    }"#;

    c.bench_function("interface_parse_2_instructions", |b| {
        b.iter(|| {
            let interface = parse_interface(black_box(PROGRAM), black_box(idl)).unwrap();
            black_box(interface);
        })
    });
}

criterion_group!(
    benches,
    bench_log_scan,
    bench_vector_decode,
    bench_struct_decode,
    bench_interface_parse
);
criterion_main!(benches);
