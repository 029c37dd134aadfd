//! Load forecast fixtures from a local directory or a static HTTP host.

use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{ForecastMeta, ForecastRow};
use crate::error::AppError;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FORECAST_FILE: &str = "forecast_7day.json";
pub const DEFAULT_META_FILE: &str = "forecast_7day_meta.json";

pub const ENV_DATA_DIR: &str = "AIRPOL_DATA_DIR";
pub const ENV_DATA_URL: &str = "AIRPOL_DATA_URL";

/// Where fixture files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    Dir(PathBuf),
    Http { base_url: String },
}

impl FixtureSource {
    /// Resolve the source from CLI flags, falling back to `.env`/environment.
    pub fn from_env(cli_url: Option<&str>, cli_dir: Option<&Path>) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve(
            cli_url,
            cli_dir,
            std::env::var(ENV_DATA_URL).ok(),
            std::env::var(ENV_DATA_DIR).ok(),
        )
    }

    /// Precedence: `--url`, `--data-dir`, `AIRPOL_DATA_URL`, `AIRPOL_DATA_DIR`, default.
    pub fn resolve(
        cli_url: Option<&str>,
        cli_dir: Option<&Path>,
        env_url: Option<String>,
        env_dir: Option<String>,
    ) -> Self {
        if let Some(url) = cli_url {
            return Self::Http { base_url: url.to_string() };
        }
        if let Some(dir) = cli_dir {
            return Self::Dir(dir.to_path_buf());
        }
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            return Self::Http { base_url: url };
        }
        match env_dir.filter(|d| !d.trim().is_empty()) {
            Some(dir) => Self::Dir(PathBuf::from(dir)),
            None => Self::Dir(PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    /// Human-readable location of `name` under this source.
    pub fn locate(&self, name: &str) -> String {
        match self {
            Self::Dir(dir) => dir.join(name).display().to_string(),
            Self::Http { base_url } => format!("{}/{}", base_url.trim_end_matches('/'), name),
        }
    }

    pub fn load_forecast(&self, name: &str) -> Result<Vec<ForecastRow>, AppError> {
        let rows: Vec<ForecastRow> = self.load_json(name)?;
        info!(rows = rows.len(), source = %self.locate(name), "loaded forecast rows");
        Ok(rows)
    }

    pub fn load_meta(&self, name: &str) -> Result<ForecastMeta, AppError> {
        let meta: ForecastMeta = self.load_json(name)?;
        debug!(week_start = ?meta.week_start, week_end = ?meta.week_end, "loaded forecast meta");
        Ok(meta)
    }

    fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, AppError> {
        let location = self.locate(name);
        match self {
            Self::Dir(dir) => {
                let text = std::fs::read_to_string(dir.join(name))
                    .map_err(|e| AppError::io(format!("Failed to read fixture '{location}': {e}")))?;
                parse_json(&text, &location)
            }
            Self::Http { .. } => fetch_json(&location),
        }
    }
}

/// Decode fixture JSON, naming the fixture in the error.
pub fn parse_json<T: DeserializeOwned>(text: &str, location: &str) -> Result<T, AppError> {
    serde_json::from_str(text)
        .map_err(|e| AppError::schema(format!("Invalid fixture JSON in '{location}': {e}")))
}

fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    debug!(%url, "fetching fixture");
    let client = Client::builder()
        .build()
        .map_err(|e| AppError::fetch(format!("Failed to build HTTP client: {e}")))?;
    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::fetch(format!("Request to '{url}' failed: {e}")))?;

    check_status(url, resp.status())?;

    let text = resp
        .text()
        .map_err(|e| AppError::fetch(format!("Failed to read body of '{url}': {e}")))?;
    parse_json(&text, url)
}

/// Non-2xx responses are fetch errors (exit code 4).
fn check_status(url: &str, status: StatusCode) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::fetch(format!("'{url}' returned HTTP {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> FixtureSource {
        FixtureSource::Dir(Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR))
    }

    #[test]
    fn cli_flags_win_over_environment() {
        let src = FixtureSource::resolve(
            Some("https://example.org/data"),
            Some(Path::new("local")),
            Some("https://env.example.org".into()),
            Some("env-dir".into()),
        );
        assert_eq!(src, FixtureSource::Http { base_url: "https://example.org/data".into() });

        let src = FixtureSource::resolve(
            None,
            Some(Path::new("local")),
            Some("https://env.example.org".into()),
            None,
        );
        assert_eq!(src, FixtureSource::Dir(PathBuf::from("local")));
    }

    #[test]
    fn environment_url_beats_environment_dir() {
        let src = FixtureSource::resolve(None, None, Some("https://env.example.org".into()), Some("d".into()));
        assert_eq!(src, FixtureSource::Http { base_url: "https://env.example.org".into() });

        let src = FixtureSource::resolve(None, None, Some("  ".into()), Some("d".into()));
        assert_eq!(src, FixtureSource::Dir(PathBuf::from("d")));

        let src = FixtureSource::resolve(None, None, None, None);
        assert_eq!(src, FixtureSource::Dir(PathBuf::from(DEFAULT_DATA_DIR)));
    }

    #[test]
    fn http_locations_join_cleanly() {
        let src = FixtureSource::Http { base_url: "https://example.org/data/".into() };
        assert_eq!(src.locate("forecast_7day.json"), "https://example.org/data/forecast_7day.json");
    }

    #[test]
    fn loads_checked_in_fixtures() {
        let src = fixtures();
        let rows = src.load_forecast(DEFAULT_FORECAST_FILE).unwrap();
        assert_eq!(rows.len(), 7);
        let meta = src.load_meta(DEFAULT_META_FILE).unwrap();
        assert!(meta.week_start.is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = fixtures().load_forecast("does_not_exist.json").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn non_success_status_is_a_fetch_error() {
        let url = "https://example.org/data/forecast_7day.json";
        assert!(check_status(url, StatusCode::OK).is_ok());
        for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR, StatusCode::MOVED_PERMANENTLY] {
            let err = check_status(url, status).unwrap_err();
            assert_eq!(err.exit_code(), 4);
            assert!(err.to_string().contains(url));
        }
    }

    #[test]
    fn schema_mismatch_is_a_schema_error() {
        let err = parse_json::<Vec<ForecastRow>>(r#"[{"day": "Mon"}]"#, "inline").unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("inline"));
    }
}
