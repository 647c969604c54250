//! Config loading behavior: defaults, partial files, parse errors.

use cardwise::config::{ChecksumFailurePolicy, ServiceConfig};
use cardwise::CardwiseError;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = ServiceConfig::load_from(&tmp.path().join("does-not-exist.yml")).unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.service_name, "cardwise");
    assert_eq!(config.checksum_failure, ChecksumFailurePolicy::ClientError);
}

#[test]
fn partial_file_fills_in_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cardwise.yml");
    std::fs::write(&path, "port: 8080\n").unwrap();

    let config = ServiceConfig::load_from(&path).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.service_name, "cardwise");
    assert_eq!(config.checksum_failure, ChecksumFailurePolicy::ClientError);
}

#[test]
fn full_file_parses() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cardwise.yml");
    std::fs::write(
        &path,
        "port: 9090\nservice_name: card-validator\nchecksum_failure: ok\n",
    )
    .unwrap();

    let config = ServiceConfig::load_from(&path).unwrap();
    assert_eq!(config.port, 9090);
    assert_eq!(config.service_name, "card-validator");
    assert_eq!(config.checksum_failure, ChecksumFailurePolicy::Ok);
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cardwise.yml");
    std::fs::write(&path, "port: [oops\n").unwrap();

    let err = ServiceConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, CardwiseError::ConfigParse { .. }));
}
