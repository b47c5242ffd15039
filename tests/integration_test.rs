use anyhow::Result;
use ilidash::synthetic::write_dataset;
use ilidash::{
    derive_weeks, filter_state, load_dataset, recompute, DatasetError, DistributionPanel,
    EstimateError, FilterError, IliWriter, PipelineError, PipelineSettings, StateSelector,
    SyntheticConfig,
};
use std::fs;
use tempfile::TempDir;

fn small_config() -> SyntheticConfig {
    SyntheticConfig {
        states: 6,
        weeks: 120,
        missing_rate: 0.05,
        ..SyntheticConfig::default()
    }
}

fn generate_file(dir: &TempDir, name: &str, config: &SyntheticConfig) -> Result<String> {
    let path = dir.path().join(name);
    let path = path.to_string_lossy().into_owned();
    let mut writer = IliWriter::new(&path)?;
    write_dataset(config, &mut writer)?;
    writer.finish()?;
    Ok(path)
}

#[test]
fn test_generated_csv_loads_and_indexes() -> Result<()> {
    let dir = TempDir::new()?;
    let config = small_config();
    let path = generate_file(&dir, "ilidata.csv", &config)?;

    let dataset = load_dataset(&path)?;
    assert_eq!(dataset.len(), config.states * config.weeks);
    assert_eq!(dataset.state_count(), config.states);
    assert!(dataset.source().is_some());

    let table = derive_weeks(&dataset);
    assert_eq!(table.len(), dataset.len());

    for state in table.states() {
        let rows = table.rows_for(state);
        assert_eq!(rows.len(), config.weeks);
        for (expected, row) in rows.iter().enumerate() {
            assert_eq!(row.weeks as usize, expected, "weeks restart per state ({})", state);
        }
        assert!(rows.windows(2).all(|w| w[0].epiweek <= w[1].epiweek));
    }
    Ok(())
}

#[test]
fn test_brotli_file_matches_plain_csv() -> Result<()> {
    let dir = TempDir::new()?;
    let config = small_config();
    let plain = load_dataset(generate_file(&dir, "plain.csv", &config)?)?;
    let packed = load_dataset(generate_file(&dir, "packed.csv.br", &config)?)?;

    assert_eq!(plain.observations(), packed.observations());
    assert_eq!(plain.missing_ili(), packed.missing_ili());
    Ok(())
}

#[test]
fn test_every_state_recomputes() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = load_dataset(generate_file(&dir, "ilidata.csv", &small_config())?)?;
    let table = derive_weeks(&dataset);
    let selector = StateSelector::from_table(&table)?;
    let settings = PipelineSettings::default();

    for state in selector.states() {
        let artifacts = recompute(&table, state, &settings)?;
        assert_eq!(artifacts.state(), state);

        match &artifacts.distribution {
            DistributionPanel::Fitted { histogram, fit, curve } => {
                assert_eq!(histogram.bin_count(), 30);
                assert!((histogram.area() - 1.0).abs() < 1e-9);
                assert!(fit.lambda().is_finite() && fit.lambda() > 0.0);
                assert_eq!(curve.len(), 500);
                assert_eq!(curve[0][0], 0.0);
            }
            other => panic!("expected a fit for {}, got {:?}", state, other),
        }
    }
    Ok(())
}

#[test]
fn test_default_selection_is_first_state_alphabetically() -> Result<()> {
    let csv = "state,epiweek,ili\nTexas,201801,1.0\nAlabama,201801,2.0\nOhio,201801,3.0\n";
    let dataset = ilidash::IliDataset::from_reader(csv.as_bytes())?;
    let selector = StateSelector::from_table(&derive_weeks(&dataset))?;

    assert_eq!(selector.selected(), "Alabama");
    assert_eq!(selector.states(), ["Alabama", "Ohio", "Texas"]);
    Ok(())
}

#[test]
fn test_degenerate_states() -> Result<()> {
    let csv = "\
state,epiweek,ili
Empty,201801,
Empty,201802,NA
Zero,201801,0
Zero,201802,0.0
Flat,201801,2
Flat,201802,2
Flat,201803,2
Flat,201804,2
";
    let dataset = ilidash::IliDataset::from_reader(csv.as_bytes())?;
    let table = derive_weeks(&dataset);
    let settings = PipelineSettings::default();

    let empty = recompute(&table, "Empty", &settings)?;
    assert_eq!(empty.distribution, DistributionPanel::NoData);
    assert_eq!(empty.series.points().len(), 2);

    let zero = recompute(&table, "Zero", &settings)?;
    match zero.distribution {
        DistributionPanel::CannotFit { reason, .. } => assert_eq!(reason, EstimateError::ZeroMean),
        other => panic!("expected CannotFit, got {:?}", other),
    }

    let flat = recompute(&table, "Flat", &settings)?;
    let fit = flat.distribution.fit().expect("flat sample has a fit");
    assert_eq!(fit.lambda(), 0.5);
    assert!((fit.pdf(0.0) - 0.5).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_unknown_state_is_rejected() -> Result<()> {
    let dataset = ilidash::IliDataset::from_reader("state,epiweek,ili\nOhio,201801,1.0\n".as_bytes())?;
    let table = derive_weeks(&dataset);

    assert_eq!(
        filter_state(&table, "Atlantis").unwrap_err(),
        FilterError::NoRows("Atlantis".to_string())
    );
    assert!(matches!(
        recompute(&table, "Atlantis", &PipelineSettings::default()),
        Err(PipelineError::Filter(_))
    ));
    Ok(())
}

#[test]
fn test_recompute_is_deterministic_across_loads() -> Result<()> {
    let dir = TempDir::new()?;
    let path = generate_file(&dir, "ilidata.csv", &small_config())?;
    let settings = PipelineSettings::default();

    let first = derive_weeks(&load_dataset(&path)?);
    let second = derive_weeks(&load_dataset(&path)?);
    let state = StateSelector::from_table(&first)?.selected().to_string();

    let a = recompute(&first, &state, &settings)?;
    let b = recompute(&second, &state, &settings)?;
    assert_eq!(a, b);

    let lambda_a = a.distribution.fit().map(|f| f.lambda().to_bits());
    let lambda_b = b.distribution.fit().map(|f| f.lambda().to_bits());
    assert_eq!(lambda_a, lambda_b);
    Ok(())
}

#[test]
fn test_load_failures() -> Result<()> {
    let dir = TempDir::new()?;

    let missing = dir.path().join("does-not-exist.csv");
    assert!(matches!(load_dataset(&missing), Err(DatasetError::Io { .. })));

    let no_ili = dir.path().join("no_ili.csv");
    fs::write(&no_ili, "state,epiweek,wili\nOhio,201801,1.0\n")?;
    assert!(matches!(load_dataset(&no_ili), Err(DatasetError::MissingColumn("ili"))));

    let headers_only = dir.path().join("headers_only.csv");
    fs::write(&headers_only, "state,epiweek,ili\n")?;
    assert!(matches!(load_dataset(&headers_only), Err(DatasetError::Empty)));
    Ok(())
}
