//! Browser-side checks for the exported bindings.

#![cfg(target_arch = "wasm32")]

use spv_wasm::prover::{check_proof_of_work, verify_proof_hex, verify_proof_json, BlockProver};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const VALID_POW_HEADER_HEX: &str = "04000000fbedbbf0cfdaf278c094f187f2eb987c86a199da22bbb20400000000000000007b7697b29129648fa08b4bcd13c9d5e60abb973a1efac9c8d573c71c807c56c3d6213557faa80518c3737ec1";

const PROOF_JSON: &str = r#"{
    "merkle_root": "d6ee6bc8864e5c08a5753d3886148fb1193d4cd2773b568d5df91acc8babbcac",
    "leaf": "77386a46e26f69b3cd435aa4faac932027f58d0b7252e62fb6c9c2489887f6df",
    "index": 7,
    "siblings": [
        "8118a77e542892fe15ae3fc771a4abfd2f5d5d5997544c3487ac36b5c85170fc",
        "ade48f2bbb57318cc79f3a8678febaa827599c509dce5940602e54c7733332e7",
        "26906cb2caeb03626102f7606ea332784281d5d20e2b4839fbb3dbb37262dbc1",
        "00aa9ad6a7841ffbbf262eb775f8357674f1ea23af11c01cfb6d481fec879701"
    ]
}"#;

#[wasm_bindgen_test]
fn checks_proof_of_work() {
    assert!(check_proof_of_work(VALID_POW_HEADER_HEX).unwrap());
    assert!(check_proof_of_work("00").is_err());
}

#[wasm_bindgen_test]
fn verifies_json_proof() {
    assert!(verify_proof_json(PROOF_JSON).unwrap());
    let tampered = PROOF_JSON.replace("\"index\": 7", "\"index\": 6");
    assert!(!verify_proof_json(&tampered).unwrap());
}

#[wasm_bindgen_test]
fn rejects_proof_from_uncommitted_body() {
    let tx_ids = js_sys::Array::new();
    tx_ids.push(&JsValue::from_str(&"11".repeat(32)));
    tx_ids.push(&JsValue::from_str(&"22".repeat(32)));
    tx_ids.push(&JsValue::from_str(&"33".repeat(32)));

    let prover = BlockProver::new(VALID_POW_HEADER_HEX, tx_ids).unwrap();
    assert_eq!(prover.tx_count(), 3);
    // Header commits to a different body.
    assert!(!prover.validate_merkle_root().unwrap());

    // The proof commits to the header's root, which this body does not reach.
    let wire = prover.proof_hex(&"33".repeat(32)).unwrap();
    assert!(!verify_proof_hex(&wire).unwrap());
}
