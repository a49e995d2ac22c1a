//! Form field validation shared by every page

pub const EMAIL_MIN_LENGTH: usize = 5;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 64;
pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 64;
pub const COMPANY_NAME_MIN_LENGTH: usize = 1;
pub const COMPANY_NAME_MAX_LENGTH: usize = 64;
pub const PROJECT_NAME_MIN_LENGTH: usize = 1;
pub const PROJECT_NAME_MAX_LENGTH: usize = 64;
pub const CLIENT_NAME_MIN_LENGTH: usize = 1;
pub const CLIENT_NAME_MAX_LENGTH: usize = 64;
pub const TASK_NAME_MIN_LENGTH: usize = 1;
pub const TASK_NAME_MAX_LENGTH: usize = 64;

fn length_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

fn non_blank_within(value: &str, min: usize, max: usize) -> bool {
    !value.trim().is_empty() && length_within(value, min, max)
}

pub fn is_email_valid(email: &str) -> bool {
    length_within(email, EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH)
        && email.contains('.')
        && email.contains('@')
}

pub fn is_password_valid(password: &str) -> bool {
    length_within(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
}

/// Person first/last name
pub fn is_name_valid(name: &str) -> bool {
    non_blank_within(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
}

pub fn is_company_valid(company: &str) -> bool {
    length_within(company, COMPANY_NAME_MIN_LENGTH, COMPANY_NAME_MAX_LENGTH)
}

pub fn is_project_name_valid(name: &str) -> bool {
    non_blank_within(name, PROJECT_NAME_MIN_LENGTH, PROJECT_NAME_MAX_LENGTH)
}

pub fn is_client_name_valid(name: &str) -> bool {
    non_blank_within(name, CLIENT_NAME_MIN_LENGTH, CLIENT_NAME_MAX_LENGTH)
}

pub fn is_task_name_valid(name: &str) -> bool {
    non_blank_within(name, TASK_NAME_MIN_LENGTH, TASK_NAME_MAX_LENGTH)
}

/// Badge for a rejected password field
pub fn password_length_hint(password: &str) -> Option<&'static str> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LENGTH {
        Some("Too Short")
    } else if len > PASSWORD_MAX_LENGTH {
        Some("Too Long")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_bounds() {
        assert!(is_email_valid("a@b.c"));
        assert!(!is_email_valid("a@bc"));
        assert!(!is_email_valid("ab.cd"));
        assert!(!is_email_valid("a@.c"));
        let long = format!("{}@example.com", "x".repeat(250));
        assert!(!is_email_valid(&long));
    }

    #[test]
    fn test_password_bounds() {
        assert!(!is_password_valid("1234567"));
        assert!(is_password_valid("12345678"));
        assert!(is_password_valid(&"p".repeat(64)));
        assert!(!is_password_valid(&"p".repeat(65)));
    }

    #[test]
    fn test_names_reject_blank() {
        assert!(!is_name_valid(""));
        assert!(!is_name_valid("   "));
        assert!(is_name_valid("Jo"));
        assert!(!is_project_name_valid("\t"));
        assert!(is_client_name_valid("Acme"));
        assert!(!is_task_name_valid(&"t".repeat(65)));
    }

    #[test]
    fn test_company_allows_whitespace_only_length() {
        assert!(is_company_valid(" "));
        assert!(!is_company_valid(""));
        assert!(!is_company_valid(&"c".repeat(65)));
    }

    #[test]
    fn test_password_length_hint() {
        assert_eq!(password_length_hint("short"), Some("Too Short"));
        assert_eq!(password_length_hint(&"x".repeat(65)), Some("Too Long"));
        assert_eq!(password_length_hint("just-right"), None);
    }
}
