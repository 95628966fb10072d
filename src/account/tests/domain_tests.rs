//! Validation tests for account form payloads and directory filtering.

use crate::account::domain::{
    AccountDomainError, Credentials, DIRECTORY_MATCH_LIMIT, ProfileUpdate, RegistrationRequest,
    UserId, UserRecord, filter_directory,
};
use rstest::rstest;

fn entry(id: i64, username: &str, email: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        username: username.to_owned(),
        email: email.to_owned(),
    }
}

#[rstest]
#[case("", "secret", "username")]
#[case("alice", "", "password")]
#[case("   ", "secret", "username")]
fn credentials_reject_missing_fields(
    #[case] username: &str,
    #[case] password: &str,
    #[case] field: &'static str,
) {
    let result = Credentials::new(username, password);
    assert_eq!(result, Err(AccountDomainError::EmptyField(field)));
}

#[test]
fn credentials_trim_their_fields() {
    let credentials = Credentials::new(" alice ", "secret").expect("credentials should validate");
    assert_eq!(credentials.username(), "alice");
}

#[test]
fn registration_requires_every_field() {
    let result = RegistrationRequest::new("Ada", "Lovelace", "ada", "secret", "", "ada@x.com");
    assert_eq!(result, Err(AccountDomainError::EmptyField("phone number")));
}

#[test]
fn registration_accepts_a_complete_form() {
    let request =
        RegistrationRequest::new("Ada", "Lovelace", "ada", "secret", "+100200300", "ada@x.com")
            .expect("registration should validate");
    assert_eq!(request.username(), "ada");
    assert_eq!(request.email(), "ada@x.com");
}

#[test]
fn profile_update_keeps_password_when_fields_left_empty() {
    let update = ProfileUpdate::new("alice", "a@x.com")
        .expect("profile should validate")
        .with_password_fields("", "", "")
        .expect("empty password fields mean no change");
    assert!(!update.changes_password());
}

#[test]
fn profile_update_rejects_mismatched_confirmation() {
    let result = ProfileUpdate::new("alice", "a@x.com")
        .expect("profile should validate")
        .with_password_fields("old", "new-secret", "other");
    assert_eq!(result, Err(AccountDomainError::PasswordMismatch));
}

#[test]
fn profile_update_requires_current_password_for_a_change() {
    let result = ProfileUpdate::new("alice", "a@x.com")
        .expect("profile should validate")
        .with_password_fields("", "new-secret", "new-secret");
    assert_eq!(result, Err(AccountDomainError::CurrentPasswordRequired));
}

#[test]
fn profile_update_accepts_a_valid_password_change() {
    let update = ProfileUpdate::new("alice", "a@x.com")
        .expect("profile should validate")
        .with_password_fields("old", "new-secret", "new-secret")
        .expect("password change should validate");
    assert!(update.changes_password());
}

#[test]
fn directory_filter_matches_username_and_email_case_insensitively() {
    let entries = vec![
        entry(1, "alice", "a@x.com"),
        entry(2, "Bob", "bob@x.com"),
        entry(3, "carol", "BO-team@x.com"),
    ];
    let matches = filter_directory(&entries, "bo", UserId::new(1));
    let usernames: Vec<&str> = matches.iter().map(|m| m.username.as_str()).collect();
    assert_eq!(usernames, vec!["Bob", "carol"]);
}

#[test]
fn directory_filter_excludes_the_current_user() {
    let entries = vec![entry(2, "bob", "bob@x.com")];
    assert!(filter_directory(&entries, "bo", UserId::new(2)).is_empty());
}

#[test]
fn directory_filter_caps_the_result() {
    let entries: Vec<UserRecord> = (1..=10)
        .map(|id| entry(id, &format!("bot-{id}"), &format!("bot{id}@x.com")))
        .collect();
    let matches = filter_directory(&entries, "bot", UserId::new(99));
    assert_eq!(matches.len(), DIRECTORY_MATCH_LIMIT);
}

#[test]
fn directory_filter_ignores_blank_queries() {
    let entries = vec![entry(2, "bob", "bob@x.com")];
    assert!(filter_directory(&entries, "   ", UserId::new(1)).is_empty());
}
