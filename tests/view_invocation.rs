//! View-path tests: mutability gating and simulated decoding through
//! `ViewClient`, plus equivalence with the log path.

use return_data_client::{
    decode, find_return_entry, parse_interface, AccountRef, ClientError, ViewClient,
};
use return_data_mock::{legacy_return_line, MockSimulator};
use std::sync::Arc;

const PROGRAM: &str = "BJYS8QEhSCk4pgtn6oArSEYNScMeTJmrNCVAzsEHaba3";

const IDL: &str = r#"{
    "version": "0.1.0",
    "name": "callee",
    "instructions": [
        {
            "name": "initialize",
            "accounts": [
                {"name": "account", "isMut": true, "isSigner": true},
                {"name": "user", "isMut": true, "isSigner": true}
            ],
            "args": []
        },
        {
            "name": "returnU64",
            "accounts": [{"name": "account", "isMut": false, "isSigner": false}],
            "args": [],
            "returns": "u64"
        },
        {
            "name": "returnPair",
            "accounts": [{"name": "account", "isMut": false, "isSigner": false}],
            "args": [],
            "returns": {"defined": "Pair"}
        },
        {
            "name": "peekNothing",
            "accounts": [{"name": "account", "isMut": false, "isSigner": false}],
            "args": []
        }
    ],
    "types": [
        {
            "name": "Pair",
            "type": {
                "kind": "struct",
                "fields": [
                    {"name": "a", "type": "u64"},
                    {"name": "b", "type": "u64"}
                ]
            }
        }
    ]
}"#;

fn pair_bytes() -> Vec<u8> {
    let mut bytes = 1u64.to_le_bytes().to_vec();
    bytes.extend_from_slice(&2u64.to_le_bytes());
    bytes
}

fn client(simulator: MockSimulator) -> ViewClient<MockSimulator> {
    let interface = Arc::new(parse_interface(PROGRAM, IDL).unwrap());
    ViewClient::new(interface, simulator)
}

#[tokio::test]
async fn read_only_instruction_decodes_via_simulation() {
    let mut simulator = MockSimulator::new();
    simulator.set_return("returnU64", 30u64.to_le_bytes().to_vec());
    let client = client(simulator);

    let accounts = [AccountRef::new("account", "AccountAddr1111")];
    let value = client.invoke_view("returnU64", &accounts, &[]).await.unwrap();
    assert_eq!(value.as_scalar().and_then(|s| s.as_u64()), Some(30));
}

#[tokio::test]
async fn mutating_instruction_is_refused_before_simulation() {
    let mut simulator = MockSimulator::new();
    simulator.set_return("initialize", vec![0; 8]);
    let client = client(simulator);

    let result = client.invoke_view("initialize", &[], &[]).await;
    assert!(matches!(result, Err(ClientError::MethodNotViewable(_))));
    // The backend had bytes ready but was never consulted.
    assert!(client.backend().calls().is_empty());
}

#[tokio::test]
async fn missing_return_type_is_not_viewable() {
    let client = client(MockSimulator::new());
    let result = client.invoke_view("peekNothing", &[], &[]).await;
    assert!(matches!(result, Err(ClientError::MethodNotViewable(_))));
}

#[tokio::test]
async fn unknown_instruction_is_distinct_from_not_viewable() {
    let client = client(MockSimulator::new());
    let result = client.invoke_view("doesNotExist", &[], &[]).await;
    assert!(matches!(result, Err(ClientError::UnknownInstruction(_))));
}

#[tokio::test]
async fn simulation_failure_propagates() {
    let client = client(MockSimulator::new()); // no canned returns
    let result = client.invoke_view("returnU64", &[], &[]).await;
    assert!(matches!(result, Err(ClientError::Simulation(_))));
}

#[tokio::test]
async fn view_path_equals_log_path_for_same_state() {
    let bytes = pair_bytes();

    // View path.
    let mut simulator = MockSimulator::new();
    simulator.set_return("returnPair", bytes.clone());
    let client = client(simulator);
    let viewed = client.invoke_view("returnPair", &[], &[]).await.unwrap();

    // Log path over the same program state: the same bytes end up in a
    // legacy return line.
    let log = vec![legacy_return_line(PROGRAM, &bytes)];
    let entry = find_return_entry(&log, PROGRAM).unwrap();
    let return_type = client.interface().return_type("returnPair").unwrap();
    let logged = decode(&entry.data, return_type).unwrap();

    assert_eq!(viewed, logged);
    assert_eq!(viewed.field("a").and_then(|s| s.as_u64()), Some(1));
    assert_eq!(viewed.field("b").and_then(|s| s.as_u64()), Some(2));
}
