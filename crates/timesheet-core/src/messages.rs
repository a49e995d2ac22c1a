//! User-facing messages for service errors, per form

use crate::error::{ErrorCode, ServiceError};
use crate::validation::*;

pub const OFFLINE_MESSAGE: &str =
    "You might be offline. Please try again when you're connected to the internet.";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong with your request";
const INVALID_FIELD_SIZE: &str = "Invalid field size. Please check values.";
const INVALID_EMAIL: &str = "Email isn't in a valid format";
const ACCOUNT_EXISTS: &str = "An account already exists for that email.";

fn email_length() -> String {
    format!(
        "Email length must be {} to {} characters",
        EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH
    )
}

fn password_length() -> String {
    format!(
        "Password length must be {} to {} characters",
        PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
    )
}

fn name_length(label: &str) -> String {
    format!(
        "{} name length must be {} to {} characters",
        label, NAME_MIN_LENGTH, NAME_MAX_LENGTH
    )
}

fn company_length() -> String {
    format!(
        "Company name length must be {} to {} characters",
        COMPANY_NAME_MIN_LENGTH, COMPANY_NAME_MAX_LENGTH
    )
}

pub fn login_error(err: &ServiceError) -> String {
    match &err.code {
        ErrorCode::ProfileNotFound => "No user found for that email".into(),
        ErrorCode::ProfileLocked => {
            "Account locked due to too many failed attempts. Try again in a few minutes.".into()
        }
        ErrorCode::ProfileInactive => {
            "This account has not be activated yet. Please check for a new user setup email."
                .into()
        }
        ErrorCode::IncorrectPassword => "Incorrect email or password".into(),
        ErrorCode::InvalidEmail => INVALID_EMAIL.into(),
        ErrorCode::FieldSize => match err.field() {
            Some("email") => email_length(),
            Some("password") => password_length(),
            _ => INVALID_FIELD_SIZE.into(),
        },
        ErrorCode::FetchFailed => OFFLINE_MESSAGE.into(),
        _ => "Unable to login with those credentials".into(),
    }
}

pub fn sign_up_error(err: &ServiceError) -> String {
    match &err.code {
        ErrorCode::AccountExists => ACCOUNT_EXISTS.into(),
        ErrorCode::InvalidEmail => INVALID_EMAIL.into(),
        ErrorCode::FieldSize => match err.field() {
            Some("email") => email_length(),
            Some("password") => password_length(),
            Some("firstName") => name_length("First"),
            Some("lastName") => name_length("Last"),
            Some("company") => company_length(),
            _ => INVALID_FIELD_SIZE.into(),
        },
        ErrorCode::FetchFailed => OFFLINE_MESSAGE.into(),
        _ => "Unable to create an account with those credentials".into(),
    }
}

pub fn new_user_setup_error(err: &ServiceError) -> String {
    match &err.code {
        ErrorCode::ProfileNotFound => "No user found for that email".into(),
        ErrorCode::TokenExpired => {
            "This invite has expired. Please contact the account owner to be re-invited.".into()
        }
        ErrorCode::InvalidToken => {
            "This account has already been setup. Please login with your credentials.".into()
        }
        ErrorCode::FieldSize => match err.field() {
            Some("password") => password_length(),
            _ => "Invalid value. Please try again.".into(),
        },
        ErrorCode::FetchFailed => OFFLINE_MESSAGE.into(),
        _ => "Unable to setup account. Please contact your administrator.".into(),
    }
}

pub fn add_user_error(err: &ServiceError) -> String {
    match &err.code {
        ErrorCode::AccountExists => ACCOUNT_EXISTS.into(),
        ErrorCode::EmailExistsInAccount => {
            "This email address is already being used in this account".into()
        }
        ErrorCode::InvalidEmail => INVALID_EMAIL.into(),
        ErrorCode::FieldSize => match err.field() {
            Some("email") => email_length(),
            Some("firstName") => name_length("First"),
            Some("lastName") => name_length("Last"),
            _ => INVALID_FIELD_SIZE.into(),
        },
        ErrorCode::FetchFailed => OFFLINE_MESSAGE.into(),
        _ => "Unable to add user to account".into(),
    }
}

/// Add-user errors shown inline in the modal; the rest go to the global handler
pub fn is_add_user_inline_error(code: &ErrorCode) -> bool {
    matches!(
        code,
        ErrorCode::EmailExistsInAccount
            | ErrorCode::AccountExists
            | ErrorCode::InvalidEmail
            | ErrorCode::FieldSize
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(code: &str) -> ServiceError {
        ServiceError::new(ErrorCode::from(code), 400, "")
    }

    fn field_err(field: &str) -> ServiceError {
        let mut e = err("FieldSize");
        e.field = Some(field.to_string());
        e
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(login_error(&err("ProfileNotFound")), "No user found for that email");
        assert_eq!(login_error(&err("IncorrectPassword")), "Incorrect email or password");
        assert_eq!(
            login_error(&field_err("email")),
            "Email length must be 5 to 254 characters"
        );
        assert_eq!(
            login_error(&field_err("password")),
            "Password length must be 8 to 64 characters"
        );
        assert_eq!(login_error(&field_err("other")), INVALID_FIELD_SIZE);
        assert_eq!(login_error(&err("FETCH_FAILED")), OFFLINE_MESSAGE);
        assert_eq!(login_error(&err("Boom")), "Unable to login with those credentials");
    }

    #[test]
    fn test_sign_up_messages() {
        assert_eq!(sign_up_error(&err("AccountExists")), ACCOUNT_EXISTS);
        assert_eq!(
            sign_up_error(&field_err("firstName")),
            "First name length must be 1 to 64 characters"
        );
        assert_eq!(
            sign_up_error(&field_err("company")),
            "Company name length must be 1 to 64 characters"
        );
        assert_eq!(
            sign_up_error(&err("InvalidToken")),
            "Unable to create an account with those credentials"
        );
    }

    #[test]
    fn test_setup_messages() {
        assert!(new_user_setup_error(&err("TokenExpired")).starts_with("This invite has expired"));
        assert!(new_user_setup_error(&err("InvalidToken")).starts_with("This account has already"));
        assert_eq!(new_user_setup_error(&field_err("token")), "Invalid value. Please try again.");
        assert_eq!(
            new_user_setup_error(&err("Other")),
            "Unable to setup account. Please contact your administrator."
        );
    }

    #[test]
    fn test_add_user_messages() {
        assert_eq!(
            add_user_error(&err("EmailExistsInAccount")),
            "This email address is already being used in this account"
        );
        assert_eq!(
            add_user_error(&field_err("lastName")),
            "Last name length must be 1 to 64 characters"
        );
        assert_eq!(add_user_error(&err("Nope")), "Unable to add user to account");
        assert!(is_add_user_inline_error(&ErrorCode::FieldSize));
        assert!(!is_add_user_inline_error(&ErrorCode::TokenExpired));
    }
}
