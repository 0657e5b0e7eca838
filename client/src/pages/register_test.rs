use super::*;

#[test]
fn validate_register_input_accepts_complete_form() {
    assert_eq!(
        validate_register_input(" alice ", " a@b.com ", "longenough"),
        Ok(("alice".to_owned(), "a@b.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "a@b.com", "longenough"),
        Err("Fill in username, email, and password.")
    );
    assert_eq!(
        validate_register_input("alice", "", "longenough"),
        Err("Fill in username, email, and password.")
    );
    assert_eq!(
        validate_register_input("alice", "a@b.com", ""),
        Err("Fill in username, email, and password.")
    );
}

#[test]
fn validate_register_input_rejects_email_without_at() {
    assert_eq!(
        validate_register_input("alice", "not-an-email", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_register_input_accepts_exactly_min_length_password() {
    assert!(validate_register_input("alice", "a@b.com", "12345678").is_ok());
}
