#![cfg(feature = "derive")]

#[test]
fn test_derive_rejects_unsupported_input() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
