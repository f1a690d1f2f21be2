use std::time::Instant;

use anyhow::Context;
use itertools::Itertools;
use log::info;
use vital_triage::utils::logging::{log_batch_complete, log_batch_start, log_triage_outcome};
use vital_triage::utils::test::fixtures;
use vital_triage::{TriageEngine, TriageLevel};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = TriageEngine::new().context("building triage engine")?;

    // Evaluate a seeded synthetic batch
    let readings = fixtures::synthetic_readings(200, 42);
    log_batch_start(readings.len());

    let start = Instant::now();
    let results = engine.evaluate_batch(&readings);
    let elapsed = start.elapsed();

    let evaluated = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results.len() - evaluated;
    log_batch_complete(evaluated, rejected, Some(elapsed));

    let counts = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .counts_by(|result| result.triage_level);
    for level in TriageLevel::ALL {
        info!(
            "{level}: {} readings",
            counts.get(&level).copied().unwrap_or(0)
        );
    }

    // Walk one critical presentation through the full pipeline
    let shock = fixtures::shock_reading();
    let result = engine.evaluate(&shock).context("evaluating shock reading")?;
    log_triage_outcome(result.triage_level);
    info!(
        "Dominant risk: {} (confidence {:.2})",
        result.risk_scores.dominant_category(),
        result.risk_scores.max_confidence()
    );

    let json = serde_json::to_string_pretty(&result).context("serializing triage result")?;
    println!("{json}");

    Ok(())
}
