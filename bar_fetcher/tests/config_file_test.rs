use std::io::Write;

use bar_fetcher::{
    BarFetcher,
    config::{DEFAULT_BASE_URL, read_config},
    errors::Error,
};
use tempfile::NamedTempFile;

#[test]
fn reads_polygon_section_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[polygon]
base_url = "http://127.0.0.1:8080/mirror"
api_key_env = "MIRROR_KEY"
"#
    )
    .unwrap();

    let config = read_config(file.path()).unwrap();
    assert_eq!(config.polygon.base_url, "http://127.0.0.1:8080/mirror");
    assert_eq!(config.polygon.api_key_env, "MIRROR_KEY");

    let fetcher = BarFetcher::from_config(&config.polygon).unwrap();
    assert_eq!(
        fetcher.provider().base_url().as_str(),
        "http://127.0.0.1:8080/mirror"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[polygon\nbase_url = ").unwrap();
    assert!(matches!(read_config(file.path()), Err(Error::ConfigParse(_))));
}

#[test]
fn empty_file_means_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = read_config(file.path()).unwrap();
    assert_eq!(config.polygon.base_url, DEFAULT_BASE_URL);
}
