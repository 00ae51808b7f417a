use test_utils::{check_program, Expected};

#[test]
fn function_call_with_return_value() {
    check_program(
        r#"HAI 1.2
HOW IZ I sq YR n
    FOUND YR PRODUKT OF n AN n
IF U SAY SO
VISIBLE I IZ sq YR 5 MKAY
KTHXBYE"#,
        Expected { stdout: "25\n" },
    );
}

#[test]
fn function_falls_off_end_yields_noob() {
    check_program(
        r#"HAI 1.2
HOW IZ I noop
    I HAS A unused ITZ 1
IF U SAY SO
VISIBLE MAEK I IZ noop MKAY A YARN
KTHXBYE"#,
        Expected { stdout: "\n" },
    );
}

#[test]
fn closure_reads_latest_outer_value_at_call_time() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A x ITZ 1
BUHBYE
HOW IZ I getx
    FOUND YR x
IF U SAY SO
x R 42
VISIBLE I IZ getx MKAY
KTHXBYE"#,
        Expected { stdout: "42\n" },
    );
}

#[test]
fn gtfo_inside_function_returns_noob() {
    check_program(
        r#"HAI 1.2
HOW IZ I early
    GTFO
    FOUND YR 1
IF U SAY SO
VISIBLE MAEK I IZ early MKAY A YARN
KTHXBYE"#,
        Expected { stdout: "\n" },
    );
}
