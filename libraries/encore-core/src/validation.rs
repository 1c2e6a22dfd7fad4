//! Account input rules checked before anything is sent to the backend

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Allowed username length in characters
pub const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 6..=20;
/// Allowed password length in characters
pub const PASSWORD_LENGTH: std::ops::RangeInclusive<usize> = 8..=20;

static EMAIL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$").ok());

/// Rejected registration field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username has the wrong length or characters
    #[error("Username must be 6-20 letters, digits, underscores or single inner spaces")]
    Username,

    /// Email address is malformed
    #[error("Email address is not valid")]
    Email,

    /// Password is too weak or not printable ASCII
    #[error("Password must be 8-20 printable ASCII characters with an uppercase letter, a digit and a symbol")]
    Password,
}

/// `local@domain.tld` with a 2-4 character top-level domain
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

/// ASCII letters, digits, `_` and spaces; no doubled `_` or spaces and no
/// space at either end
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_LENGTH.contains(&username.chars().count())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
        && !username.contains("__")
        && !username.contains("  ")
        && !username.starts_with(' ')
        && !username.ends_with(' ')
}

/// Printable ASCII only, with at least one uppercase letter, digit and
/// punctuation character
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_LENGTH.contains(&password.chars().count())
        && password.chars().all(|c| c == ' ' || c.is_ascii_graphic())
        && password.chars().any(|c| c.is_ascii_punctuation())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

/// Check all registration fields, reporting the first one that fails
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if !is_valid_username(username) {
        return Err(ValidationError::Username);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::Email);
    }
    if !is_valid_password(password) {
        return Err(ValidationError::Password);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        for email in [
            "validuser01@gmail.com",
            "21021234@vnu.edu.vn",
            "email-name.company@domain.net",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "invalid.user.gmail.com",
            "@gmail.com",
            "trung0503@",
            "trung0503@gmail",
            "user@domain.toolong",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn accepts_strong_passwords() {
        assert!(is_valid_password("_Qwerty1"));
        assert!(is_valid_password("Nguyen Quoc Trung_03"));
    }

    #[test]
    fn rejects_weak_passwords() {
        for password in [
            "_Trung3",               // too short
            "really_Long_passw0rd_", // too long
            "#password69",           // no uppercase
            "Pas$sword",             // no digit
            "Pas5word",              // no symbol
            "Mật_khẩu_34",           // not ASCII
        ] {
            assert!(!is_valid_password(password), "{password}");
        }
    }

    #[test]
    fn username_rules() {
        assert!(is_valid_username("abcxyz"));
        assert!(is_valid_username("abcdeABCDEabcdeABCDE"));
        assert!(is_valid_username("ada lovelace_1"));

        assert!(!is_valid_username("abcde"));
        assert!(!is_valid_username("abcdeABCDEabcdeABCDEx"));
        assert!(!is_valid_username("ada__lovelace"));
        assert!(!is_valid_username("ada  lovelace"));
        assert!(!is_valid_username(" adalovelace"));
        assert!(!is_valid_username("adalovelace "));
        assert!(!is_valid_username("ada.lovelace"));
    }

    #[test]
    fn registration_reports_first_bad_field() {
        assert_eq!(
            validate_registration("ada_lovelace", "ada@example.com", "Secret_123"),
            Ok(())
        );
        assert_eq!(
            validate_registration("ada", "ada@example.com", "Secret_123"),
            Err(ValidationError::Username)
        );
        assert_eq!(
            validate_registration("ada_lovelace", "ada@example", "Secret_123"),
            Err(ValidationError::Email)
        );
        assert_eq!(
            validate_registration("ada_lovelace", "ada@example.com", "secret"),
            Err(ValidationError::Password)
        );
    }
}
