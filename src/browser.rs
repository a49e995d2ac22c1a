//! Browser glue: the "authenticated" flag in localStorage, the local date
//! and CSV downloads.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage};

use crate::config::AUTHENTICATED_KEY;

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Whether a previous visit ended signed in
pub fn was_authenticated() -> bool {
    storage()
        .and_then(|s| s.get_item(AUTHENTICATED_KEY).ok().flatten())
        .is_some_and(|v| v == "true")
}

pub fn set_authenticated(authenticated: bool) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable");
        return;
    };
    let result = if authenticated {
        storage.set_item(AUTHENTICATED_KEY, "true")
    } else {
        storage.remove_item(AUTHENTICATED_KEY)
    };
    if result.is_err() {
        log::warn!("Failed to update {} flag", AUTHENTICATED_KEY);
    }
}

/// Today in the browser's timezone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    local_date(now.get_full_year() as i32, now.get_month(), now.get_date())
}

/// `month0` is zero-based like the JS Date API
fn local_date(year: i32, month0: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap_or_default()
}

/// Hand `bytes` to the browser as a `text/csv` file download
pub fn download_csv(bytes: &[u8], filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object url: {:?}", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_month_is_zero_based() {
        assert_eq!(local_date(2024, 0, 31), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(local_date(2024, 11, 1), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }
}
