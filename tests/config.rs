//! Configuration file and builder integration tests.

use dimselect::*;
use std::sync::Mutex;
use tempfile::TempDir;

// Tests that read or write DIMSELECT_* variables hold this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_environment() {
    for var in [ENV_REQUESTED_SIZE, ENV_DIMENSIONS, ENV_ALGORITHM] {
        std::env::remove_var(var);
    }
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sampler.json");

    let config = SamplerConfigBuilder::new()
        .requested_size(6)
        .dimensions(120)
        .algorithm(SampleAlgorithm::PartialShuffle)
        .build()
        .unwrap();
    config.save_to_file(&path).unwrap();

    let loaded = SamplerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_file_drives_selector() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_environment();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sampler.toml");
    std::fs::write(&path, "requested_size = 0\ndimensions = 25\nalgorithm = \"rejection\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.algorithm, SampleAlgorithm::Rejection);

    let mut select = MultipleRandomDimensionSelect::from_config(&config);
    let mut rng = Random::with_seed(1);
    let dims = collect_dimensions(&mut select, &mut rng).unwrap();
    assert_eq!(dims.len(), 5);
}

#[test]
fn test_invalid_files_are_reported() {
    let dir = TempDir::new().unwrap();

    let bad_json = dir.path().join("bad.json");
    std::fs::write(&bad_json, "{ \"dimensions\": \"many\" }").unwrap();
    let err = SamplerConfig::load_from_file(&bad_json).unwrap_err();
    assert_eq!(err.category(), "json");

    let bad_algorithm = dir.path().join("bad.toml");
    std::fs::write(&bad_algorithm, "algorithm = \"weighted\"\n").unwrap();
    let err = SamplerConfig::load_from_file(&bad_algorithm).unwrap_err();
    assert_eq!(err.category(), "toml");

    let missing = dir.path().join("missing.toml");
    let err = SamplerConfig::load_from_file(&missing).unwrap_err();
    assert_eq!(err.category(), "io");
}

#[test]
fn test_ready_requires_dimensions() {
    let mut config = SamplerConfigBuilder::new().requested_size(3).build().unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, DimSelectError::InvalidParameter { .. }));

    config.dimensions = 9;
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_environment();

    std::env::set_var(ENV_REQUESTED_SIZE, "7");
    std::env::set_var(ENV_DIMENSIONS, " 49 ");
    std::env::set_var(ENV_ALGORITHM, "rejection");

    let config = SamplerConfig::load_from_environment().unwrap();
    assert_eq!(config.requested_size, 7);
    assert_eq!(config.dimensions, 49);
    assert_eq!(config.algorithm, SampleAlgorithm::Rejection);
    assert_eq!(load_config(None::<&str>).unwrap(), config);

    // The environment wins over the file.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sampler.toml");
    std::fs::write(&path, "requested_size = 2\ndimensions = 10\n").unwrap();
    assert_eq!(load_config(Some(&path)).unwrap(), config);

    std::env::set_var(ENV_DIMENSIONS, "many");
    let err = SamplerConfig::load_from_environment().unwrap_err();
    assert_eq!(err.category(), "config");
    assert!(err.to_string().contains(ENV_DIMENSIONS));

    std::env::set_var(ENV_DIMENSIONS, "49");
    std::env::set_var(ENV_REQUESTED_SIZE, "-1");
    let err = load_config(None::<&str>).unwrap_err();
    assert_eq!(err.category(), "config");

    std::env::set_var(ENV_REQUESTED_SIZE, "7");
    std::env::set_var(ENV_ALGORITHM, "weighted");
    let err = SamplerConfig::load_from_environment().unwrap_err();
    assert_eq!(err.category(), "invalid_parameter");

    clear_environment();
    assert_eq!(SamplerConfig::load_from_environment().unwrap(), SamplerConfig::default());
}
