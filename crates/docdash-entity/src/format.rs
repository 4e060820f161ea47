//! Human-readable rendering of elapsed time.

use chrono::Duration;

/// String shown for anything under a minute.
pub const NOW_LABEL: &str = "agora";

/// Render how long a connection has been open.
///
/// `"{h}h {m}m"` from one hour up, `"{m}m"` from one minute up, and
/// [`NOW_LABEL`] below that (including negative durations).
pub fn format_online_time(elapsed: Duration) -> String {
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if hours >= 1 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes >= 1 {
        format!("{minutes}m")
    } else {
        NOW_LABEL.to_string()
    }
}

/// Render how long ago something happened, for activity feeds.
pub fn format_time_ago(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        NOW_LABEL.to_string()
    } else if hours < 1 {
        format!("há {minutes} min")
    } else if days < 1 {
        format!("há {hours} h")
    } else if days == 1 {
        "há 1 dia".to_string()
    } else {
        format!("há {days} dias")
    }
}
