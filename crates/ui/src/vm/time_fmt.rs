/// Format a duration as `m:ss`, e.g. `75` → `"1:15"`.
#[must_use]
pub fn format_seconds(seconds: impl Into<u64>) -> String {
    let seconds = seconds.into();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
