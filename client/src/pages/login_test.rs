use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(("alice".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("alice", "  spaced  "),
        Ok(("alice".to_owned(), "  spaced  ".to_owned()))
    );
}
