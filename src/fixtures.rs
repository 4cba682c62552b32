//! Built-in sample data for offline/demo operation.
//!
//! Used by [`ApiClient`](crate::api::ApiClient) when fixture mode is
//! active: no network call happens and these records stand in for the
//! backend response, in this order.

use chrono::{Duration, Utc};

use crate::models::{TokenStats, WhaleNotification};

/// Returns the whale-notification sample set (SOL, BONK, JUP).
///
/// Timestamps are derived from the current clock (now, -1h, -2h) so the
/// table looks recent in demos.
pub fn whale_notifications() -> Vec<WhaleNotification> {
    let now = Utc::now();
    let one_hour_ago = now - Duration::hours(1);
    let two_hours_ago = now - Duration::hours(2);

    vec![
        WhaleNotification {
            id: 1,
            timestamp: now.to_rfc3339(),
            address: "0x7a250d5630b4cf539739df2c5dacb4c659f2488d".to_string(),
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            time_interval: "1h".to_string(),
            buyer_count: 245,
            seller_count: 124,
            inserted_at: now.to_rfc3339(),
        },
        WhaleNotification {
            id: 2,
            timestamp: one_hour_ago.to_rfc3339(),
            address: "0x6b175474e89094c44da98b954eedeac495271d0f".to_string(),
            symbol: "BONK".to_string(),
            name: "Bonk".to_string(),
            time_interval: "1h".to_string(),
            buyer_count: 187,
            seller_count: 203,
            inserted_at: one_hour_ago.to_rfc3339(),
        },
        WhaleNotification {
            id: 3,
            timestamp: two_hours_ago.to_rfc3339(),
            address: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
            symbol: "JUP".to_string(),
            name: "Jupiter".to_string(),
            time_interval: "1h".to_string(),
            buyer_count: 312,
            seller_count: 98,
            inserted_at: two_hours_ago.to_rfc3339(),
        },
    ]
}

/// Returns the token-stats sample set matching [`whale_notifications`].
pub fn token_stats() -> Vec<TokenStats> {
    let now = Utc::now();
    let one_hour_ago = now - Duration::hours(1);
    let two_hours_ago = now - Duration::hours(2);

    vec![
        TokenStats {
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            notification_count: 1,
            total_buys: 245,
            total_sells: 124,
            net_activity: 121,
            latest_activity: now.to_rfc3339(),
        },
        TokenStats {
            symbol: "BONK".to_string(),
            name: "Bonk".to_string(),
            notification_count: 1,
            total_buys: 187,
            total_sells: 203,
            net_activity: -16,
            latest_activity: one_hour_ago.to_rfc3339(),
        },
        TokenStats {
            symbol: "JUP".to_string(),
            name: "Jupiter".to_string(),
            notification_count: 1,
            total_buys: 312,
            total_sells: 98,
            net_activity: 214,
            latest_activity: two_hours_ago.to_rfc3339(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let records = whale_notifications();
        let mut ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn stats_net_matches_totals() {
        for stats in token_stats() {
            assert_eq!(
                stats.net_activity,
                stats.total_buys as i64 - stats.total_sells as i64
            );
        }
    }
}
