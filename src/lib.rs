#[cfg(feature = "http_api")]
pub mod http_api;
pub mod render;
pub mod schedule;
pub mod status;

pub use render::{render_edit_page, render_html_document, render_text_table};
pub use schedule::{DAY_NAMES, DAYS_PER_WEEK, Day, Schedule, ScheduleError, WEEKDAYS, Week};
pub use status::{PickupStatus, UnknownStatus};
