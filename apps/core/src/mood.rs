//! Mood trend derivation.
//!
//! Daily average sentiment of a user's own messages. Every calendar day
//! between the first and the last scored message appears exactly once; days
//! without messages repeat the previous day's average.

use crate::brain::Bucket;
use crate::models::{Message, Role};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average sentiment for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub average: f64,
    /// Number of scored messages that day; 0 for a carried-forward day.
    pub samples: usize,
}

/// Builds the daily trend from a chronological slice of messages.
pub fn daily_trend(messages: &[Message]) -> Vec<DailyMood> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for message in messages.iter().filter(|m| m.role == Role::User) {
        if let Some(score) = message.sentiment_score {
            let entry = by_day.entry(message.timestamp.date_naive()).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
        return Vec::new();
    };

    let mut trend = Vec::new();
    let mut carried = 0.0;
    let mut day = first;
    while day <= last {
        match by_day.get(&day) {
            Some(&(sum, count)) => {
                carried = sum / count as f64;
                trend.push(DailyMood {
                    date: day,
                    average: carried,
                    samples: count,
                });
            }
            None => trend.push(DailyMood {
                date: day,
                average: carried,
                samples: 0,
            }),
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    trend
}

/// Headline numbers for a trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub days: usize,
    pub latest: f64,
    /// Latest average minus the first day's average.
    pub change: f64,
    pub bucket: Bucket,
}

impl MoodSummary {
    pub fn from_trend(trend: &[DailyMood]) -> Option<Self> {
        let first = trend.first()?;
        let last = trend.last()?;
        Some(Self {
            days: trend.len(),
            latest: last.average,
            change: last.average - first.average,
            bucket: Bucket::from_score(last.average),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: i64, role: Role, score: Option<f64>, day: u32, hour: u32) -> Message {
        Message {
            id,
            user: "Guest".to_string(),
            role,
            text: String::new(),
            sentiment_score: score,
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_empty_history_has_no_trend() {
        assert!(daily_trend(&[]).is_empty());
        assert!(MoodSummary::from_trend(&[]).is_none());
    }

    #[test]
    fn test_averages_per_day_and_ignores_bot_rows() {
        let messages = vec![
            message(1, Role::User, Some(0.5), 1, 9),
            message(2, Role::Bot, None, 1, 9),
            message(3, Role::User, Some(-0.1), 1, 18),
            message(4, Role::Bot, Some(0.9), 1, 18),
        ];
        let trend = daily_trend(&messages);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].date, date(1));
        assert!((trend[0].average - 0.2).abs() < 1e-9);
        assert_eq!(trend[0].samples, 2);
    }

    #[test]
    fn test_gaps_are_forward_filled() {
        let messages = vec![
            message(1, Role::User, Some(-0.4), 2, 10),
            message(3, Role::User, Some(0.6), 5, 10),
        ];
        let trend = daily_trend(&messages);
        let dates: Vec<NaiveDate> = trend.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2), date(3), date(4), date(5)]);
        assert_eq!(trend[1].average, -0.4);
        assert_eq!(trend[2].average, -0.4);
        assert_eq!(trend[2].samples, 0);
        assert_eq!(trend[3].average, 0.6);
    }

    #[test]
    fn test_summary_reports_change_and_bucket() {
        let messages = vec![
            message(1, Role::User, Some(-0.4), 2, 10),
            message(2, Role::User, Some(0.6), 4, 10),
        ];
        let summary = MoodSummary::from_trend(&daily_trend(&messages)).unwrap();
        assert_eq!(summary.days, 3);
        assert_eq!(summary.latest, 0.6);
        assert!((summary.change - 1.0).abs() < 1e-9);
        assert_eq!(summary.bucket, Bucket::Positive);
    }
}
