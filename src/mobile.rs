//! Mobile layout detection

use leptos::ev;
use leptos::prelude::*;

use crate::config::MOBILE_WIDTH;

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(MOBILE_WIDTH + 1.0)
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_WIDTH
}

/// Tracks whether the viewport is phone sized; follows window resizes until
/// the calling component unmounts
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (is_mobile, set_is_mobile) = signal(is_mobile_width(window_width()));

    let handle = window_event_listener(ev::resize, move |_| {
        let mobile = is_mobile_width(window_width());
        if is_mobile.get_untracked() != mobile {
            set_is_mobile.set(mobile);
        }
    });
    on_cleanup(move || handle.remove());

    is_mobile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(is_mobile_width(320.0));
        assert!(!is_mobile_width(768.0));
    }
}
