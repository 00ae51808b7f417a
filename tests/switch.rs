use test_utils::{check_program, Expected};

#[test]
fn switch_matches_string_case_via_expression_statement_it() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A x ITZ "2"
BUHBYE
x
WTF?
OMG "1"
    VISIBLE "one"
OMG "2"
    VISIBLE "two"
OMGWTF
    VISIBLE "other"
OIC
KTHXBYE"#,
        Expected { stdout: "two\n" },
    );
}

#[test]
fn switch_falls_to_default_when_no_case_matches() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A x ITZ 9
BUHBYE
x
WTF?
OMG 1
    VISIBLE "one"
OMG 2
    VISIBLE "two"
OMGWTF
    VISIBLE "other"
OIC
KTHXBYE"#,
        Expected { stdout: "other\n" },
    );
}

#[test]
fn gtfo_inside_case_breaks_switch_not_enclosing_loop() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A var ITZ 0
BUHBYE
IM IN YR loop UPPIN YR var TIL BOTH SAEM var AN 2
    var
    WTF?
    OMG 0
        GTFO
    OMGWTF
        VISIBLE "default"
    OIC
    VISIBLE var
IM OUTTA YR loop
KTHXBYE"#,
        Expected { stdout: "0\ndefault\n1\n" },
    );
}
