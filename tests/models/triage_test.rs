#[cfg(test)]
mod tests {
    use vital_triage::config::DecisionThresholds;
    use vital_triage::models::triage::*;

    #[test]
    fn test_levels_ordered_by_urgency() {
        assert!(TriageLevel::P1Red < TriageLevel::P2Yellow);
        assert!(TriageLevel::P2Yellow < TriageLevel::P3Green);
        assert!(TriageLevel::P3Green < TriageLevel::P4Black);

        assert!(TriageLevel::P1Red.is_more_urgent_than(TriageLevel::P2Yellow));
        assert!(!TriageLevel::P4Black.is_more_urgent_than(TriageLevel::P3Green));
    }

    #[test]
    fn test_level_codes() {
        assert_eq!(TriageLevel::P1Red.code(), "P1_RED");
        assert_eq!(TriageLevel::P2Yellow.code(), "P2_YELLOW");
        assert_eq!(TriageLevel::P3Green.code(), "P3_GREEN");
        assert_eq!(TriageLevel::P4Black.code(), "P4_BLACK");
        assert_eq!(TriageLevel::P4Black.description(), "expectant");
    }

    #[test]
    fn test_level_serialization() {
        assert_eq!(
            serde_json::to_string(&TriageLevel::P1Red).unwrap(),
            "\"P1_RED\""
        );
        let level: TriageLevel = serde_json::from_str("\"P4_BLACK\"").unwrap();
        assert_eq!(level, TriageLevel::P4Black);
    }

    #[test]
    fn test_severity_band_cut_points() {
        let thresholds = DecisionThresholds::default();

        assert_eq!(thresholds.band(0.95), SeverityBand::Critical);
        assert_eq!(thresholds.band(0.9), SeverityBand::Critical);
        assert_eq!(thresholds.band(0.89), SeverityBand::High);
        assert_eq!(thresholds.band(0.6), SeverityBand::High);
        assert_eq!(thresholds.band(0.59), SeverityBand::Moderate);
        assert_eq!(thresholds.band(0.3), SeverityBand::Moderate);
        assert_eq!(thresholds.band(0.29), SeverityBand::Low);
        assert_eq!(thresholds.band(0.0), SeverityBand::Low);
    }

    #[test]
    fn test_band_distance() {
        assert_eq!(SeverityBand::Critical.distance(SeverityBand::High), 1);
        assert_eq!(SeverityBand::Low.distance(SeverityBand::Critical), 3);
        assert_eq!(SeverityBand::Moderate.distance(SeverityBand::Moderate), 0);
    }
}
