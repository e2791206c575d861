use anyhow::Result;
use sns_receiver::config::Config;
use tokio_test::assert_err;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Test: Optional settings fall back to their defaults
#[test]
fn test_config_defaults() -> Result<()> {
    let config = Config::from_vars(vars(&[("SERVER_PORT", "8080")]))?;

    assert_eq!(config.server_port, 8080);
    assert_eq!(config.max_body_bytes, 256 * 1024);

    Ok(())
}

/// Test: Explicit settings override the defaults
#[test]
fn test_config_overrides() -> Result<()> {
    let config = Config::from_vars(vars(&[
        ("SERVER_PORT", "9000"),
        ("MAX_BODY_BYTES", "4096"),
        ("UNRELATED", "ignored"),
    ]))?;

    assert_eq!(config.server_port, 9000);
    assert_eq!(config.max_body_bytes, 4096);

    Ok(())
}

/// Test: Missing or malformed required settings are reported
#[test]
fn test_config_rejects_invalid_environment() {
    assert_err!(Config::from_vars(vars(&[])));
    assert_err!(Config::from_vars(vars(&[("SERVER_PORT", "not-a-port")])));
    assert_err!(Config::from_vars(vars(&[("SERVER_PORT", "70000")])));
}
