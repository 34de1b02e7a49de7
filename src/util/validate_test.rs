use super::*;

#[test]
fn email_required() {
    assert!(email("").is_some());
    assert!(email("   ").is_some());
}

#[test]
fn email_shape_needs_local_domain_and_dot() {
    assert!(email("plainaddress").is_some());
    assert!(email("@nodomainlocal.com").is_some());
    assert!(email("user@").is_some());
    assert!(email("user@nodot").is_some());
    assert!(email("user@.com").is_some());
    assert!(email("user@test.com.").is_some());
}

#[test]
fn email_accepts_normal_addresses() {
    assert!(email("u@test.com").is_none());
    assert!(email("  a.b@sub.example.org  ").is_none());
}

#[test]
fn password_required_and_min_length() {
    assert!(password("").is_some());
    assert!(password("12345").is_some());
    assert!(password("secret1").is_none());
    assert_eq!(password("123456"), None);
}

#[test]
fn password_message_names_the_minimum() {
    let msg = password("abc").expect("too short");
    assert!(msg.contains('6'));
}
