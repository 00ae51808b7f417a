use test_utils::{check_failing, check_program, Expected};

#[test]
fn confine_appends_at_length_then_overwrites() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A arr ITZ A NUMBR UHS OF 3
BUHBYE
CONFINE 10 IN arr AT 0
CONFINE 20 IN arr AT 1
VISIBLE arr[0]
VISIBLE arr[1]
CONFINE 99 IN arr AT 0
VISIBLE arr[0]
KTHXBYE"#,
        Expected {
            stdout: "10\n20\n99\n",
        },
    );
}

#[test]
fn confine_past_length_plus_one_is_out_of_range() {
    let err = check_failing(
        r#"HAI 1.2
WAZZUP
I HAS A arr ITZ A NUMBR UHS OF 3
BUHBYE
CONFINE 10 IN arr AT 5
KTHXBYE"#,
    );
    assert!(err.message.contains("out of range"));
}

#[test]
fn discharge_removes_and_sets_it() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A arr ITZ A NUMBR UHS OF 3
BUHBYE
CONFINE 10 IN arr AT 0
CONFINE 20 IN arr AT 1
DISCHARGE arr AT 0
VISIBLE IT
VISIBLE arr[0]
KTHXBYE"#,
        Expected {
            stdout: "10\n20\n",
        },
    );
}

#[test]
fn array_size_must_be_positive() {
    let err = check_failing(
        r#"HAI 1.2
WAZZUP
I HAS A arr ITZ A NUMBR UHS OF 0
BUHBYE
KTHXBYE"#,
    );
    assert!(err.message.contains("positive"));
}

#[test]
fn non_integer_array_index_errors() {
    let err = check_failing(
        r#"HAI 1.2
WAZZUP
I HAS A arr ITZ A NUMBR UHS OF 3
BUHBYE
CONFINE 10 IN arr AT 1.5
KTHXBYE"#,
    );
    assert!(err.message.contains("integer"));
}
