//! Small utilities shared by the inspection components.

use chrono::NaiveDate;
use js_sys::Date;

/// Today's date in the browser's time zone.
pub fn today() -> Option<NaiveDate> {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// `dd/mm/yyyy`, or a dash when the date is unknown.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Tone of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; \
     transform: translateX(-50%); color: #fff; padding: 10px 20px; \
     border-radius: 4px; z-index: 10000; font-family: Arial, sans-serif;";

/// Inline style of a toast, green for success and red for failure, matching
/// the state badges of the inspection sheet.
pub fn toast_style(kind: ToastKind) -> String {
    let background = match kind {
        ToastKind::Success => "#2e7d32",
        ToastKind::Failure => "#c62828",
    };
    format!("{} background: {};", TOAST_STYLE, background)
}

/// Shows `message` at the bottom of the screen for three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    let _ = toast.set_attribute("style", &toast_style(kind));

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            toast.remove();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_tone_sets_the_background() {
        assert!(toast_style(ToastKind::Success).ends_with("background: #2e7d32;"));
        assert!(toast_style(ToastKind::Failure).ends_with("background: #c62828;"));
        assert!(toast_style(ToastKind::Failure).starts_with("position: fixed;"));
    }

    #[test]
    fn dates_use_french_order() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 7)), "07/03/2025");
        assert_eq!(format_date(None), "—");
    }
}
