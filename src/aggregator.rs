use std::io;

use crate::error::IngestError;
use crate::parser::parse_line;
use crate::types::{ActionKind, StatMap, UserAction, UserStat};
use crate::utils::warn_once;

/// Session accounting over a stream of server log lines.
///
/// One instance owns one [`StatMap`]; create a fresh instance per isolated
/// run. Lines must be applied in log order, since join/leave pairing depends
/// on it.
#[derive(Debug, Default)]
pub struct SessionAggregator {
    stats: StatMap,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a fallible line sequence, parsing and applying each line.
    ///
    /// The first malformed line or read error aborts the run. State already
    /// accumulated is left in place but is not guaranteed to correspond to
    /// any particular prefix of the input; callers that need partial results
    /// must snapshot before the failing line.
    pub fn ingest<I>(&mut self, lines: I) -> Result<(), IngestError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            let line = line?;
            if let Some(action) = parse_line(&line)? {
                self.apply(&action);
            }
        }
        Ok(())
    }

    /// Ingests every line of a buffered reader.
    pub fn ingest_reader<R: io::BufRead>(&mut self, reader: R) -> Result<(), IngestError> {
        self.ingest(reader.lines())
    }

    /// Applies one parsed action to the aggregate state.
    pub fn apply(&mut self, action: &UserAction) {
        let stat = self
            .stats
            .entry(action.user_name.clone())
            .or_insert_with(|| UserStat {
                user_name: action.user_name.clone(),
                ..Default::default()
            });

        // First identifier wins; later announcements never overwrite it.
        if stat.uuid.is_none()
            && let Some(uuid) = &action.uuid
        {
            stat.uuid = Some(uuid.clone());
        }

        match action.kind {
            ActionKind::Join => {
                // Last join wins; at most one open session per user.
                stat.pending_login = Some(action.time);
            }
            ActionKind::Leave => {
                if let Some(login) = stat.pending_login.take() {
                    let minutes = (action.time - login).num_minutes();
                    if minutes < 0 {
                        // A timestamp-only log cannot express a session that
                        // crosses midnight; count the login but no minutes.
                        warn_once(format!(
                            "⚠️  Leave at {} predates join at {} for {}; counting 0 minutes",
                            action.time, login, action.user_name
                        ));
                    }
                    stat.total_play_time += minutes.max(0) as u64;
                    stat.login_count += 1;
                }
            }
            ActionKind::None => {}
        }
    }

    /// Read-only view of the state accumulated so far.
    pub fn snapshot(&self) -> &StatMap {
        &self.stats
    }

    /// Consumes the aggregator, yielding the final mapping.
    pub fn into_stats(self) -> StatMap {
        self.stats
    }
}
