#[cfg(test)]
mod tests {
    use vital_triage::algorithm::assemble::{InterventionMap, assemble};
    use vital_triage::config::DecisionThresholds;
    use vital_triage::models::risk::{
        IndicatorContribution, RiskCategory, RiskScore, RiskScores,
    };
    use vital_triage::models::triage::SeverityBand;
    use vital_triage::models::vitals::{ValidReading, VitalField, VitalReading};
    use vital_triage::{TriageError, TriageLevel, validate};

    fn reading() -> ValidReading {
        validate(&VitalReading::new(75, 120, 80, 16, 98.0, 37.0, 15)).unwrap()
    }

    #[test]
    fn test_standard_map_is_total() {
        let map = InterventionMap::standard();
        map.verify().unwrap();

        for level in TriageLevel::ALL {
            for category in RiskCategory::ALL {
                assert!(
                    !map.interventions(level, category).is_empty(),
                    "no interventions for {level} / {category}"
                );
            }
        }
    }

    #[test]
    fn test_empty_map_fails_verification() {
        let err = InterventionMap::empty().verify().unwrap_err();
        assert!(matches!(err, TriageError::Configuration { .. }));
    }

    #[test]
    fn test_immediate_shock_interventions() {
        let map = InterventionMap::standard();
        assert_eq!(
            map.interventions(TriageLevel::P1Red, RiskCategory::Shock),
            [
                "initiate IV fluids",
                "prepare for blood transfusion",
                "alert trauma team"
            ]
        );
    }

    #[test]
    fn test_assemble_merges_and_orders_indicators() {
        let scores = RiskScores {
            shock: RiskScore::new(
                RiskCategory::Shock,
                0.95,
                vec![IndicatorContribution {
                    name: "elevated shock index",
                    source: VitalField::HeartRate,
                    weight: 1.5,
                }],
            ),
            cardiac: RiskScore::new(
                RiskCategory::Cardiac,
                0.4,
                vec![IndicatorContribution {
                    name: "tachycardia",
                    source: VitalField::HeartRate,
                    weight: 0.5,
                }],
            ),
            respiratory: RiskScore::new(
                RiskCategory::Respiratory,
                0.7,
                vec![IndicatorContribution {
                    name: "hypoxemia",
                    source: VitalField::OxygenSaturation,
                    weight: 0.6,
                }],
            ),
        };

        let thresholds = DecisionThresholds::default();
        let result = assemble(
            scores,
            TriageLevel::P1Red,
            &reading(),
            &InterventionMap::standard(),
            &thresholds,
            vec![],
        );

        // Merged across categories, ordered by contribution descending.
        let names: Vec<_> = result
            .emergency_indicators
            .iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["elevated shock index", "hypoxemia", "tachycardia"]);

        // Each indicator carries its scorer's severity band.
        assert_eq!(result.emergency_indicators[0].severity, SeverityBand::Critical);
        assert_eq!(result.emergency_indicators[0].category, RiskCategory::Shock);
        assert_eq!(result.emergency_indicators[1].severity, SeverityBand::High);
        assert_eq!(result.emergency_indicators[2].severity, SeverityBand::Moderate);

        // Dominant category is shock, so interventions come from the
        // P1_RED / shock entry.
        assert_eq!(
            result.recommended_interventions,
            vec![
                "initiate IV fluids".to_string(),
                "prepare for blood transfusion".to_string(),
                "alert trauma team".to_string()
            ]
        );

        // Confidence map is a passthrough of the scorer confidences.
        assert!((result.confidence_scores[&RiskCategory::Shock] - 0.95).abs() < 1e-12);
        assert!((result.confidence_scores[&RiskCategory::Cardiac] - 0.4).abs() < 1e-12);
        assert!((result.confidence_scores[&RiskCategory::Respiratory] - 0.7).abs() < 1e-12);

        assert!(!result.is_degraded());
    }

    #[test]
    fn test_assemble_records_degraded_categories() {
        let scores = RiskScores {
            shock: RiskScore::new(RiskCategory::Shock, 0.1, vec![]),
            cardiac: RiskScore::new(RiskCategory::Cardiac, 0.1, vec![]),
            respiratory: RiskScore::new(RiskCategory::Respiratory, 0.1, vec![]),
        };

        let result = assemble(
            scores,
            TriageLevel::P3Green,
            &reading(),
            &InterventionMap::standard(),
            &DecisionThresholds::default(),
            vec![RiskCategory::Cardiac],
        );

        assert!(result.is_degraded());
        assert_eq!(result.degraded_categories, vec![RiskCategory::Cardiac]);
    }
}
