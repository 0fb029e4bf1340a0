use anyhow::Context;
use log::info;
use readmit_analytics::aggregate::{self, GroupField, NumericField};
use readmit_analytics::{
    AnalyticsConfig, DatasetCache, DatasetSummary, MongoPatientSource, PatientLoader, SourceConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let source_config = SourceConfig::from_env();
    let analytics = AnalyticsConfig::default();

    let source = MongoPatientSource::connect(&source_config)
        .await
        .context("connecting to the patient document store")?;
    let cache = DatasetCache::new(
        PatientLoader::with_config(source, &analytics),
        analytics.cache_ttl,
    );

    let dataset = cache
        .get_or_refresh()
        .await
        .context("loading the patient dataset")?;
    info!(
        "loaded {} patient records ({} skipped) at {}",
        dataset.records.len(),
        dataset.skipped,
        dataset.loaded_at
    );

    let summary = DatasetSummary::compute(&dataset.records);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Readmission rate by race, every group shown
    let by_race =
        aggregate::readmission_rate_by(&dataset.records, |r| GroupField::Race.value_of(r));
    println!("{}", serde_json::to_string_pretty(&by_race)?);

    // Top diagnoses by readmission rate, small groups filtered out
    let by_diagnosis = aggregate::readmission_rate_by(&dataset.records, |r| {
        GroupField::PrimaryDiagnosis.value_of(r)
    });
    let top = aggregate::top_rates(by_diagnosis, analytics.min_group_size, analytics.top_n);
    println!("{}", serde_json::to_string_pretty(&top)?);

    // Rate versus prior inpatient visits, for the trend line
    let trend = aggregate::bounded_line_series(
        &dataset.records,
        |r| r.number_inpatient,
        analytics.trend_max_key,
    );
    println!("{}", serde_json::to_string_pretty(&trend)?);

    // Cohort comparison: means by readmission status
    let stats = aggregate::summary_stats(
        &dataset.records,
        |r| GroupField::ReadmittedLabel.value_of(r),
        &[
            NumericField::NumMedications,
            NumericField::NumLabProcedures,
            NumericField::NumberDiagnoses,
            NumericField::TimeInHospital,
        ],
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);

    for metric in aggregate::key_risk_factors(&dataset.records) {
        info!(
            "{}: {} ({:.1}%)",
            metric.label,
            metric.count,
            metric.share * 100.0
        );
    }

    Ok(())
}
