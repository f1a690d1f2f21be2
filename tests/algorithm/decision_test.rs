#[cfg(test)]
mod tests {
    use vital_triage::config::DecisionThresholds;
    use vital_triage::models::risk::{RiskCategory, RiskScore, RiskScores};
    use vital_triage::models::vitals::{ValidReading, VitalReading};
    use vital_triage::{TriageLevel, decide, validate};

    fn scores(shock: f64, cardiac: f64, respiratory: f64) -> RiskScores {
        RiskScores {
            shock: RiskScore::new(RiskCategory::Shock, shock, vec![]),
            cardiac: RiskScore::new(RiskCategory::Cardiac, cardiac, vec![]),
            respiratory: RiskScore::new(RiskCategory::Respiratory, respiratory, vec![]),
        }
    }

    fn normal_reading() -> ValidReading {
        validate(&VitalReading::new(75, 120, 80, 16, 98.0, 37.0, 15)).unwrap()
    }

    fn reading_with_gcs(gcs: u8) -> ValidReading {
        validate(&VitalReading::new(75, 120, 80, 16, 98.0, 37.0, gcs)).unwrap()
    }

    #[test]
    fn test_low_coma_scale_dominates() {
        // GCS 6 with all other vitals normal and all risks low still
        // yields P1_RED: rule 1 strictly dominates the later rules.
        let thresholds = DecisionThresholds::default();
        let level = decide(&scores(0.1, 0.1, 0.1), &reading_with_gcs(6), &thresholds);
        assert_eq!(level, TriageLevel::P1Red);
    }

    #[test]
    fn test_confidence_cut_points() {
        let thresholds = DecisionThresholds::default();
        let reading = normal_reading();

        assert_eq!(
            decide(&scores(0.9, 0.0, 0.0), &reading, &thresholds),
            TriageLevel::P1Red
        );
        assert_eq!(
            decide(&scores(0.0, 0.89, 0.0), &reading, &thresholds),
            TriageLevel::P2Yellow
        );
        assert_eq!(
            decide(&scores(0.0, 0.0, 0.6), &reading, &thresholds),
            TriageLevel::P2Yellow
        );
        assert_eq!(
            decide(&scores(0.59, 0.3, 0.0), &reading, &thresholds),
            TriageLevel::P3Green
        );
        assert_eq!(
            decide(&scores(0.1, 0.0, 0.2), &reading, &thresholds),
            TriageLevel::P3Green
        );
    }

    #[test]
    fn test_arrest_pattern_is_expectant() {
        let thresholds = DecisionThresholds::default();

        let no_pulse = validate(&VitalReading::new(0, 60, 40, 12, 70.0, 35.0, 3)).unwrap();
        // The arrest drives cardiac confidence past the immediate cut
        // point; the non-survivable pattern must still win.
        assert_eq!(
            decide(&scores(0.2, 1.0, 0.5), &no_pulse, &thresholds),
            TriageLevel::P4Black
        );

        let no_breathing = validate(&VitalReading::new(40, 80, 50, 0, 50.0, 35.0, 3)).unwrap();
        assert_eq!(
            decide(&scores(0.2, 0.9, 1.0), &no_breathing, &thresholds),
            TriageLevel::P4Black
        );
    }

    #[test]
    fn test_decide_stays_in_documented_levels() {
        let thresholds = DecisionThresholds::default();
        let reading = normal_reading();

        for step in 0..=20 {
            let confidence = f64::from(step) / 20.0;
            let level = decide(&scores(confidence, 0.0, 0.0), &reading, &thresholds);
            assert!(TriageLevel::ALL.contains(&level));
        }
    }

    #[test]
    fn test_custom_cut_points_respected() {
        let thresholds = DecisionThresholds {
            immediate: 0.8,
            urgent: 0.5,
            observable: 0.2,
            coma_scale_critical: 10,
        };

        assert_eq!(
            decide(&scores(0.85, 0.0, 0.0), &normal_reading(), &thresholds),
            TriageLevel::P1Red
        );
        assert_eq!(
            decide(&scores(0.1, 0.1, 0.1), &reading_with_gcs(10), &thresholds),
            TriageLevel::P1Red
        );
        assert_eq!(
            decide(&scores(0.55, 0.0, 0.0), &normal_reading(), &thresholds),
            TriageLevel::P2Yellow
        );
    }
}
