use std::io::Write;

use anyhow::Result;

use crate::types::StatMap;
use crate::utils::format_play_time;

/// Writes the plain-text per-user report, one block per user in name order.
pub fn print_stats(out: &mut impl Write, stats: &StatMap) -> Result<()> {
    for stat in stats.values() {
        writeln!(out, "Username: {}", stat.user_name)?;
        if let Some(uuid) = &stat.uuid {
            writeln!(out, "UUID: {uuid}")?;
        }
        writeln!(out, "Login Count: {}", stat.login_count)?;
        writeln!(
            out,
            "Total Play Time: {}",
            format_play_time(stat.total_play_time)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Serializes the aggregate state as a JSON array of per-user records.
pub fn to_json(stats: &StatMap, pretty: bool) -> Result<String> {
    let records: Vec<_> = stats.values().collect();
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserStat;

    fn sample_stats() -> StatMap {
        let mut stats = StatMap::new();
        stats.insert(
            "Notch".to_string(),
            UserStat {
                user_name: "Notch".to_string(),
                uuid: Some("1111-1111".to_string()),
                login_count: 2,
                total_play_time: 95,
                pending_login: None,
            },
        );
        stats.insert(
            "Alex".to_string(),
            UserStat {
                user_name: "Alex".to_string(),
                uuid: None,
                login_count: 1,
                total_play_time: 5,
                pending_login: None,
            },
        );
        stats
    }

    #[test]
    fn test_print_stats_orders_by_name() {
        let mut out = Vec::new();
        print_stats(&mut out, &sample_stats()).expect("print");
        let text = String::from_utf8(out).expect("utf8");

        let alex = text.find("Username: Alex").expect("Alex block");
        let notch = text.find("Username: Notch").expect("Notch block");
        assert!(alex < notch);
        assert!(text.contains("Login Count: 2"));
        assert!(text.contains("Total Play Time: 95 minutes (1h 35m)"));
        assert!(text.contains("UUID: 1111-1111"));
    }

    #[test]
    fn test_to_json_skips_pending_login() {
        let json = to_json(&sample_stats(), false).expect("json");
        assert!(json.contains("\"userName\":\"Notch\""));
        assert!(json.contains("\"totalPlayTime\":95"));
        assert!(!json.contains("pendingLogin"));
    }
}
