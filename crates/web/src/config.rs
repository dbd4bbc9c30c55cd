use anyhow::{Context, Result};
use chrono::{DateTime, Days, NaiveTime, Utc};
use std::time::Duration;

const DEFAULT_CHALLENGE_NAME: &str = "Fitness Challenge";
const DEFAULT_LEAD_DAYS: u64 = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub challenge: ChallengeConfig,
}

#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    /// Longest a live view may go without re-reading the lifts
    pub refresh_interval: Duration,
    pub countdown_tick: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), Utc::now())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .map(|port| port.parse::<u16>())
                .transpose()
                .context("PORT must be a number")?
                .unwrap_or(8080),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            challenge: ChallengeConfig {
                name: lookup("CHALLENGE_NAME").unwrap_or_else(|| DEFAULT_CHALLENGE_NAME.to_string()),
                starts_at: match lookup("CHALLENGE_START") {
                    Some(raw) => DateTime::parse_from_rfc3339(&raw)
                        .with_context(|| format!("CHALLENGE_START is not an RFC 3339 date: {raw}"))?
                        .with_timezone(&Utc),
                    None => default_start(now),
                },
                refresh_interval: Duration::from_secs(
                    lookup("REFRESH_INTERVAL_SECS")
                        .map(|secs| secs.parse::<u64>())
                        .transpose()
                        .context("REFRESH_INTERVAL_SECS must be a number")?
                        .unwrap_or(2)
                        .max(1),
                ),
                countdown_tick: Duration::from_millis(
                    lookup("COUNTDOWN_TICK_MS")
                        .map(|ms| ms.parse::<u64>())
                        .transpose()
                        .context("COUNTDOWN_TICK_MS must be a number")?
                        .unwrap_or(1000)
                        .max(100),
                ),
            },
        })
    }
}

/// Midnight UTC, one week after `now`.
fn default_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let day = now
        .date_naive()
        .checked_add_days(Days::new(DEFAULT_LEAD_DAYS))
        .unwrap_or(now.date_naive());
    day.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 15, 42, 7).unwrap()
    }

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned(), now())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database_url.is_none());
        assert_eq!(config.challenge.name, "Fitness Challenge");
        assert_eq!(
            config.challenge.starts_at,
            Utc.with_ymd_and_hms(2025, 3, 17, 0, 0, 0).unwrap()
        );
        assert_eq!(config.challenge.refresh_interval, Duration::from_secs(2));
        assert_eq!(config.challenge.countdown_tick, Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_values() {
        let config = config(&[
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://lifts@db/lifts"),
            ("CHALLENGE_START", "2025-04-01T09:00:00+02:00"),
            ("REFRESH_INTERVAL_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url.as_deref(), Some("postgres://lifts@db/lifts"));
        assert_eq!(
            config.challenge.starts_at,
            Utc.with_ymd_and_hms(2025, 4, 1, 7, 0, 0).unwrap()
        );
        assert_eq!(config.challenge.refresh_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config(&[("PORT", "http")]).is_err());
        assert!(config(&[("CHALLENGE_START", "next monday")]).is_err());
        assert!(config(&[("COUNTDOWN_TICK_MS", "-1")]).is_err());
    }

    #[test]
    fn test_blank_database_url_means_memory_store() {
        assert!(config(&[("DATABASE_URL", "  ")]).unwrap().database_url.is_none());
    }
}
