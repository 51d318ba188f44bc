//! Field rules shared by request payloads, usable from
//! `#[validate(custom(function = ...))]` and hand-written `Validate` impls.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length of a name, counted in characters after trimming
pub const NAME_MAX: usize = 100;

/// bcrypt ignores everything past this many bytes
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Build a `ValidationError` with a fixed message
pub fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Names are stored trimmed, so the length rule applies to the trimmed value
pub fn trimmed_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if len == 0 || len > NAME_MAX {
        return Err(invalid("length", "name must be 1-100 characters"));
    }
    Ok(())
}

/// Reject passwords bcrypt would silently truncate
pub fn password_fits_bcrypt(password: &str) -> Result<(), ValidationError> {
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(invalid("length", "password must be at most 72 bytes"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_name() {
        assert!(trimmed_name("Acme").is_ok());
        assert!(trimmed_name("  Acme  ").is_ok());
        assert!(trimmed_name("").is_err());
        assert!(trimmed_name("   ").is_err());
        assert!(trimmed_name("\t\n").is_err());
        assert!(trimmed_name(&"x".repeat(100)).is_ok());
        assert!(trimmed_name(&"x".repeat(101)).is_err());
        // padding does not count towards the limit
        assert!(trimmed_name(&format!("  {}  ", "x".repeat(100))).is_ok());
    }

    #[test]
    fn test_password_byte_limit() {
        assert!(password_fits_bcrypt(&"a".repeat(72)).is_ok());
        assert!(password_fits_bcrypt(&"a".repeat(73)).is_err());
        // 72 characters, 144 bytes
        assert!(password_fits_bcrypt(&"é".repeat(72)).is_err());
        assert!(password_fits_bcrypt(&"é".repeat(36)).is_ok());
    }
}
