use clap::Parser;
use staticd::config::Config;

#[test]
fn test_config_parses_port() {
    let cfg = Config::try_parse_from(["staticd", "8080"]).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_accepts_port_range_bounds() {
    let cfg = Config::try_parse_from(["staticd", "1024"]).unwrap();
    assert_eq!(cfg.port, 1024);

    let cfg = Config::try_parse_from(["staticd", "65535"]).unwrap();
    assert_eq!(cfg.port, 65535);
}

#[test]
fn test_config_rejects_privileged_port() {
    assert!(Config::try_parse_from(["staticd", "80"]).is_err());
    assert!(Config::try_parse_from(["staticd", "1023"]).is_err());
}

#[test]
fn test_config_rejects_out_of_range_port() {
    assert!(Config::try_parse_from(["staticd", "65536"]).is_err());
    assert!(Config::try_parse_from(["staticd", "0"]).is_err());
}

#[test]
fn test_config_rejects_non_numeric_port() {
    assert!(Config::try_parse_from(["staticd", "http"]).is_err());
}

#[test]
fn test_config_requires_port_argument() {
    assert!(Config::try_parse_from(["staticd"]).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::try_parse_from(["staticd", "9000"]).unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.port, cfg2.port);
}
