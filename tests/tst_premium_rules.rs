use groww_premium_alerts::rules::{evaluate_side, Thresholds};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_override_raises_the_bar() {
        // nifty carries min_premium 30000; a premium that would fire for an
        // equity stays quiet here
        let thresholds = Thresholds { min_premium: 30000.0, min_oi: 50.0 };

        let quiet = evaluate_side(
            "NIFTY", 24510.0, "25-Sep-2025", "PE", "Nifty 22000 PE",
            25.0, 40000.0, 750.0, &thresholds, "https://groww.in/options/nifty",
        );
        assert!(quiet.is_none()); // 25 * 750 = 18750 < 30000

        let fired = evaluate_side(
            "NIFTY", 24510.0, "25-Sep-2025", "PE", "Nifty 22000 PE",
            45.0, 40000.0, 750.0, &thresholds, "https://groww.in/options/nifty",
        )
        .unwrap();
        assert_eq!(fired.premium, 33750.0);
    }

    #[test]
    fn test_alert_message_layout() {
        let thresholds = Thresholds { min_premium: 4000.0, min_oi: 50.0 };

        let alert = evaluate_side(
            "Infosys", 1450.5, "25-Sep-2025", "CE", "Infosys 1600 CE",
            7.5, 900.0, 800.0, &thresholds,
            "https://groww.in/options/infosys-ltd?expiry=25-Sep-2025",
        )
        .unwrap();

        let msg = alert.message();
        assert!(msg.starts_with("🚨 Infosys LTP 1450.5"));
        assert!(msg.contains("| Expiry 25-Sep-2025 |"));
        assert!(msg.contains("| Infosys 1600 CE |"));
        assert!(msg.contains("| Premium 6000 |"));
        assert!(msg.contains("| OI 900 |"));
        assert!(msg.ends_with("https://groww.in/options/infosys-ltd?expiry=25-Sep-2025"));
    }

    #[test]
    fn test_both_sides_can_fire_independently() {
        let thresholds = Thresholds::default();

        let put = evaluate_side(
            "Infosys", 1450.5, "25-Sep-2025", "PE", "Infosys 1300 PE",
            10.0, 120.0, 800.0, &thresholds, "url",
        );
        let call = evaluate_side(
            "Infosys", 1450.5, "25-Sep-2025", "CE", "Infosys 1600 CE",
            2.0, 5000.0, 800.0, &thresholds, "url",
        );

        assert!(put.is_some());
        assert!(call.is_none()); // 2 * 800 = 1600 under the default 4000
    }
}
