use test_utils::{check_failing, check_program, Expected};

#[test]
fn both_saem_numeric_equality() {
    check_program(
        "HAI 1.2\nVISIBLE BOTH SAEM 5 AN 5.0\nKTHXBYE",
        Expected { stdout: "WIN\n" },
    );
}

#[test]
fn diffrint_numeric_inequality() {
    check_program(
        "HAI 1.2\nVISIBLE DIFFRINT 5 AN 6\nKTHXBYE",
        Expected { stdout: "WIN\n" },
    );
}

#[test]
fn comparing_non_numeric_types_errors_with_exact_hint() {
    let err = check_failing(r#"HAI 1.2
VISIBLE BOTH SAEM "cat" AN 5
KTHXBYE"#);
    assert_eq!(
        err.message,
        "Cannot compare non-numeric types. Only NUMBR and NUMBAR can be compared."
    );
    assert_eq!(
        err.hint.as_deref(),
        Some("Convert YARN and NUMBR to numbers first using explicit typecasting.")
    );
}
