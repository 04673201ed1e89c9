use crate::config;
use crate::models::OptionContract;

/// Find the contract whose strike is closest to `target`, by bisection over
/// the sorted strike ladder. Out-of-range targets clamp to the ends; a tie in
/// distance prefers the lower strike.
pub fn find_closest_strike(contracts: &[OptionContract], target: f64) -> Option<&OptionContract> {
    if contracts.is_empty() {
        return None;
    }

    let pos = contracts.partition_point(|c| c.strike_rupees() < target);

    if pos == 0 {
        return contracts.first();
    }
    if pos == contracts.len() {
        return contracts.last();
    }

    let before = &contracts[pos - 1];
    let after = &contracts[pos];

    if (before.strike_rupees() - target).abs() <= (after.strike_rupees() - target).abs() {
        Some(before)
    } else {
        Some(after)
    }
}

/// Put-side target strike price for a given underlying LTP
pub fn put_target(ltp: f64) -> f64 {
    config::PUT_TARGET_RATIO * ltp
}

/// Call-side target strike price for a given underlying LTP
pub fn call_target(ltp: f64) -> f64 {
    config::CALL_TARGET_RATIO * ltp
}

/// Premium collected for writing `qty` units at `last_price`
pub fn premium(last_price: f64, qty: f64) -> f64 {
    last_price * qty
}

/// Premium quantity: per-ticker override, else twice the exchange lot size
pub fn resolve_premium_qty(override_qty: Option<f64>, lot_size: f64) -> f64 {
    override_qty.unwrap_or(config::DEFAULT_LOT_MULTIPLIER * lot_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(strikes_rupees: &[f64]) -> Vec<OptionContract> {
        strikes_rupees
            .iter()
            .map(|s| OptionContract {
                strike_price: s * 100.0,
                ce: None,
                pe: None,
            })
            .collect()
    }

    #[test]
    fn test_find_closest_strike_interior() {
        let contracts = ladder(&[100.0, 105.0, 110.0, 115.0]);

        // 106 is closer to 105 than to 110
        let hit = find_closest_strike(&contracts, 106.0).unwrap();
        assert_eq!(hit.strike_rupees(), 105.0);

        // 109 is closer to 110
        let hit = find_closest_strike(&contracts, 109.0).unwrap();
        assert_eq!(hit.strike_rupees(), 110.0);
    }

    #[test]
    fn test_find_closest_strike_tie_prefers_lower() {
        let contracts = ladder(&[100.0, 110.0]);

        // Equidistant between 100 and 110
        let hit = find_closest_strike(&contracts, 105.0).unwrap();
        assert_eq!(hit.strike_rupees(), 100.0);
    }

    #[test]
    fn test_find_closest_strike_clamps_to_ends() {
        let contracts = ladder(&[100.0, 105.0, 110.0]);

        let below = find_closest_strike(&contracts, 50.0).unwrap();
        assert_eq!(below.strike_rupees(), 100.0);

        let above = find_closest_strike(&contracts, 500.0).unwrap();
        assert_eq!(above.strike_rupees(), 110.0);

        // Exact match on the first strike
        let exact = find_closest_strike(&contracts, 100.0).unwrap();
        assert_eq!(exact.strike_rupees(), 100.0);
    }

    #[test]
    fn test_find_closest_strike_empty() {
        assert!(find_closest_strike(&[], 100.0).is_none());
    }

    #[test]
    fn test_targets() {
        assert_eq!(put_target(1000.0), 905.0);
        assert_eq!(call_target(1000.0), 1095.0);
    }

    #[test]
    fn test_resolve_premium_qty() {
        // Override wins
        assert_eq!(resolve_premium_qty(Some(750.0), 25.0), 750.0);

        // Default is twice the lot size
        assert_eq!(resolve_premium_qty(None, 400.0), 800.0);
    }

    #[test]
    fn test_premium() {
        assert_eq!(premium(12.5, 800.0), 10000.0);
    }
}
