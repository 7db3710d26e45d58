use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::Serialize;

/// What a log line says a user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Join,
    Leave,
    /// A user-bearing line with no session transition (e.g. a UUID
    /// announcement from the authenticator thread).
    None,
}

/// One user-relevant event extracted from a single log line.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAction {
    pub user_name: String,
    pub uuid: Option<String>,
    pub kind: ActionKind,
    pub time: NaiveTime,
}

/// Accumulated statistics for one user across a log run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStat {
    pub user_name: String,
    /// First identifier announced for this user; never overwritten.
    pub uuid: Option<String>,
    /// Completed join/leave pairs.
    pub login_count: u32,
    /// Whole minutes across all completed join/leave pairs.
    pub total_play_time: u64,
    /// Set while the user has an open session.
    #[serde(skip)]
    pub pending_login: Option<NaiveTime>,
}

/// Map from user name to that user's statistics.
pub type StatMap = BTreeMap<String, UserStat>;
