use test_utils::{check_program, Expected};

#[test]
fn hello_world() {
    check_program(
        "HAI 1.2\nVISIBLE \"HELLO WORLD!\"\nKTHXBYE",
        Expected {
            stdout: "HELLO WORLD!\n",
        },
    );
}

#[test]
fn sum_of_two_numbers() {
    check_program(
        "HAI 1.2\nVISIBLE SUM OF 3 AN 4\nKTHXBYE",
        Expected { stdout: "7\n" },
    );
}

#[test]
fn visible_smooshes_multiple_operands_without_separator() {
    check_program(
        "HAI 1.2\nVISIBLE \"A\" AN \"B\" AN \"C\"\nKTHXBYE",
        Expected { stdout: "ABC\n" },
    );
}

#[test]
fn visible_bang_suppresses_newline() {
    check_program(
        "HAI 1.2\nVISIBLE \"no newline\"!\nVISIBLE \"next\"\nKTHXBYE",
        Expected {
            stdout: "no newlinenext\n",
        },
    );
}
