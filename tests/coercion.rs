use test_utils::{check_failing, check_program, Expected};

#[test]
fn explicit_int_to_yarn() {
    check_program(
        "HAI 1.2\nVISIBLE MAEK 5 A YARN\nKTHXBYE",
        Expected { stdout: "5\n" },
    );
}

#[test]
fn explicit_float_to_yarn_has_two_decimals() {
    check_program(
        "HAI 1.2\nVISIBLE MAEK 3.5 A YARN\nKTHXBYE",
        Expected { stdout: "3.50\n" },
    );
}

#[test]
fn explicit_noob_to_numbr_is_zero() {
    check_program(
        "HAI 1.2\nVISIBLE MAEK NOOB A NUMBR\nKTHXBYE",
        Expected { stdout: "0\n" },
    );
}

#[test]
fn yarn_to_numbr_parses_integer() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A x ITZ "42"
BUHBYE
x IS NOW A NUMBR
VISIBLE x
KTHXBYE"#,
        Expected { stdout: "42\n" },
    );
}

#[test]
fn non_numeric_yarn_to_numbr_errors() {
    let err = check_failing(r#"HAI 1.2
VISIBLE MAEK "abc" A NUMBR
KTHXBYE"#);
    assert!(err.message.contains("cast"));
}

#[test]
fn empty_yarn_is_falsy() {
    check_program(
        r#"HAI 1.2
VISIBLE MAEK "" A TROOF
KTHXBYE"#,
        Expected { stdout: "FAIL\n" },
    );
}

#[test]
fn smoosh_stringifies_numbers_implicitly() {
    check_program(
        "HAI 1.2\nVISIBLE SMOOSH \"x = \" AN 5 MKAY\nKTHXBYE",
        Expected { stdout: "x = 5\n" },
    );
}
