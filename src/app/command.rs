use crate::domain::models::{CopyField, QueryTicket};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Arm the debouncer with the latest search text.
    ScheduleQuery(String),
    /// Run the binary. `None` runs it without an argument.
    Resolve(QueryTicket, Option<String>),
    Copy(CopyField, String),
    OpenPreferencesAfter(Duration),
    SavePreferences(PathBuf),
}
