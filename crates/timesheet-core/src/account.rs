use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::percent_decode_str;

/// Selectable timezone for accounts and profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    pub value: &'static str,
    pub text: &'static str,
    pub description: &'static str,
}

pub const TIMEZONES: [TimezoneOption; 8] = [
    TimezoneOption { value: "America/Puerto_Rico", text: "Atlantic (Puerto Rico)", description: "GMT-4:00" },
    TimezoneOption { value: "America/New_York", text: "Eastern (New York)", description: "GMT-5:00" },
    TimezoneOption { value: "America/Chicago", text: "Central (Chicago)", description: "GMT-6:00" },
    TimezoneOption { value: "America/Denver", text: "Mountain (Denver)", description: "GMT-7:00" },
    TimezoneOption { value: "America/Phoenix", text: "Arizona", description: "GMT-7:00" },
    TimezoneOption { value: "America/Los_Angeles", text: "Pacific (Los Angeles)", description: "GMT-8:00" },
    TimezoneOption { value: "America/Anchorage", text: "Alaska (Anchorage)", description: "GMT-9:00" },
    TimezoneOption { value: "Pacific/Honolulu", text: "Hawaii (Honolulu)", description: "GMT-10:00" },
];

pub fn timezone(value: &str) -> Option<&'static TimezoneOption> {
    TIMEZONES.iter().find(|tz| tz.value == value)
}

/// Week start choices, as the account page lists them (0 = Sunday)
pub const WEEK_START_OPTIONS: [(u8, &str); 3] = [(0, "Sunday"), (6, "Saturday"), (1, "Monday")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// First name carried in an invite link: base64, possibly percent-encoded by
/// the mail client
pub fn decode_invite_name(segment: &str) -> Option<String> {
    let unescaped = percent_decode_str(segment).decode_utf8().ok()?;
    let bytes = STANDARD.decode(unescaped.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_lookup() {
        assert_eq!(timezone("America/Phoenix").unwrap().text, "Arizona");
        assert!(timezone("Europe/Paris").is_none());
    }

    #[test]
    fn test_week_start_options() {
        let values: Vec<u8> = WEEK_START_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0, 6, 1]);
        assert_eq!(WEEK_START_OPTIONS[0].1, "Sunday");
    }

    #[test]
    fn test_role() {
        assert_eq!(Role::default().as_str(), "user");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_decode_invite_name() {
        assert_eq!(decode_invite_name("Sm9zw6k=").as_deref(), Some("José"));
        assert_eq!(decode_invite_name("Sm9zw6k%3D").as_deref(), Some("José"));
        assert_eq!(decode_invite_name("not base64!"), None);
    }
}
