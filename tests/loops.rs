use test_utils::{check_program, Expected};

#[test]
fn uppin_loop_counts_five_iterations() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A var ITZ 0
BUHBYE
IM IN YR loop UPPIN YR var TIL BOTH SAEM var AN 5
VISIBLE var
IM OUTTA YR loop
KTHXBYE"#,
        Expected {
            stdout: "0\n1\n2\n3\n4\n",
        },
    );
}

#[test]
fn nerfin_loop_counts_down() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A var ITZ 3
BUHBYE
IM IN YR loop NERFIN YR var WILE BOTH SAEM var AN 0
VISIBLE var
IM OUTTA YR loop
KTHXBYE"#,
        Expected { stdout: "3\n2\n1\n0\n" },
    );
}

#[test]
fn gtfo_breaks_nearest_loop_only() {
    check_program(
        r#"HAI 1.2
WAZZUP
I HAS A var ITZ 0
BUHBYE
IM IN YR loop UPPIN YR var TIL BOTH SAEM var AN 10
    VISIBLE var
    BOTH SAEM var AN 2
    O RLY?
    YA RLY
        GTFO
    OIC
IM OUTTA YR loop
KTHXBYE"#,
        Expected { stdout: "0\n1\n2\n" },
    );
}
