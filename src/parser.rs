use chrono::NaiveTime;

use crate::error::ParseError;
use crate::types::{ActionKind, UserAction};

/// token[1] of every line logged by the main server thread.
const SERVER_THREAD_MARKER: &str = "[Server";
/// token[4] of an authenticator `UUID of player <user> is <uuid>` line.
const UUID_MARKER: &str = "UUID";

const TIMESTAMP_LEN: usize = 10;
const TIMESTAMP_FORMAT: &str = "[%H:%M:%S]";

// Example log lines:
//   [01:28:14] [Server thread/INFO]: Notch left the game
//   [01:41:10] [User Authenticator #5/INFO]: UUID of player Notch is 11111111-1111-1111-1111-111111111111
//   [01:41:10] [Server thread/INFO]: Notch[/1.1.1.1:49297] logged in with entity id 107534 at (21.4, 101.9, -41.4)
//   [01:41:10] [Server thread/INFO]: Notch joined the game
//   [02:01:35] [Server thread/INFO]: Notch fell out of the world

/// Parses a single server log line.
///
/// Returns `Ok(None)` for well-formed lines that carry no user event (chat,
/// world messages, authenticator noise); callers skip those. A returned
/// action always has a non-empty user name.
pub fn parse_line(line: &str) -> Result<Option<UserAction>, ParseError> {
    let time = parse_timestamp(line)?;
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.get(1) == Some(&SERVER_THREAD_MARKER) {
        // Server-thread shape: `... <user> joined the game` / `... left the game`
        if tokens.len() < 5 {
            return Err(malformed_line(line));
        }
        let kind = match tokens[4] {
            "joined" => ActionKind::Join,
            "left" => ActionKind::Leave,
            // e.g. "fell out of the world", "logged in with entity id ..."
            _ => return Ok(None),
        };
        return Ok(Some(UserAction {
            user_name: tokens[3].to_string(),
            uuid: None,
            kind,
            time,
        }));
    }

    // Identity shape: `[User Authenticator #N/INFO]: UUID of player <user> is <uuid>`
    if tokens.len() < 5 {
        return Err(malformed_line(line));
    }
    if tokens[4] != UUID_MARKER {
        return Ok(None);
    }
    if tokens.len() < 10 {
        return Err(malformed_line(line));
    }
    Ok(Some(UserAction {
        user_name: tokens[7].to_string(),
        uuid: Some(tokens[9].to_string()),
        kind: ActionKind::None,
        time,
    }))
}

/// Parses the fixed-width `[HH:MM:SS]` prefix (24-hour clock) occupying the
/// first 10 characters of every log line.
fn parse_timestamp(line: &str) -> Result<NaiveTime, ParseError> {
    let prefix = line.get(..TIMESTAMP_LEN).ok_or_else(|| malformed_timestamp(line))?;
    NaiveTime::parse_from_str(prefix, TIMESTAMP_FORMAT).map_err(|_| malformed_timestamp(line))
}

fn malformed_timestamp(line: &str) -> ParseError {
    ParseError::MalformedTimestamp {
        line: line.to_string(),
    }
}

fn malformed_line(line: &str) -> ParseError {
    ParseError::MalformedLine {
        line: line.to_string(),
    }
}
