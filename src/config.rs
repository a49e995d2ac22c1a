//! Build-time configuration
//!
//! `TIMESHEET_API_URL` is read when the crate is compiled; leave it unset to
//! talk to the origin that served the app.

pub const API_BASE_URL: &str = match option_env!("TIMESHEET_API_URL") {
    Some(url) => url,
    None => "",
};

/// Unsaved time entries are flushed after this much quiet
pub const AUTOSAVE_DELAY_MS: u32 = 5_000;

/// Viewport widths at or below this use the mobile layouts
pub const MOBILE_WIDTH: f64 = 767.0;

/// The boot loader only appears if resuming the session takes longer than this
pub const BOOT_LOADER_DELAY_MS: u32 = 300;

/// localStorage key mirroring whether the user is signed in
pub const AUTHENTICATED_KEY: &str = "authenticated";

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_prefixes_base() {
        assert!(api_url("/api/time").ends_with("/api/time"));
        assert!(api_url("/api/time").starts_with(API_BASE_URL));
    }
}
