use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::options::{self, CommandOption};
use crate::error::{Error, Result};
use crate::types::ImageFormat;

/// Extraction parameters suitable for config files and presets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Custom `pdfimages` location; None means look it up on `PATH`
    pub executable: Option<PathBuf>,
    /// Alternate xpdfrc passed through with `-cfg`
    pub config_file: Option<PathBuf>,
    pub first_page: Option<u64>,
    pub last_page: Option<u64>,
    pub format: ImageFormat,
    pub owner_password: Option<String>,
    pub user_password: Option<String>,
    /// Kill the tool after this many seconds; None waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl ExtractParams {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Options in a fixed order: executable, config, pages, format, owner/user password.
    pub fn to_options(&self) -> Vec<CommandOption> {
        let mut opts = Vec::new();

        if let Some(path) = &self.executable {
            opts.push(options::with_custom_path(path.clone()));
        }
        if let Some(path) = &self.config_file {
            opts.push(options::with_custom_config(path.clone()));
        }

        match (self.first_page, self.last_page) {
            (Some(from), Some(to)) => opts.push(options::with_page_range(from, to)),
            (Some(from), None) => opts.push(options::with_page_from(from)),
            (None, Some(to)) => opts.push(options::with_page_to(to)),
            (None, None) => {}
        }

        match self.format {
            ImageFormat::Pnm => {}
            ImageFormat::Jpeg => opts.push(options::with_save_dct_as_jpeg()),
            ImageFormat::Raw => opts.push(options::with_save_raw()),
        }

        if let Some(pw) = &self.owner_password {
            opts.push(options::with_owner_password(pw.clone()));
        }
        if let Some(pw) = &self.user_password {
            opts.push(options::with_user_password(pw.clone()));
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_add_no_options() {
        assert!(ExtractParams::default().to_options().is_empty());
    }

    #[test]
    fn both_bounds_become_a_range() {
        let params = ExtractParams {
            first_page: Some(2),
            last_page: Some(5),
            ..Default::default()
        };
        assert_eq!(
            params.to_options(),
            vec![CommandOption::PageRange { from: 2, to: 5 }]
        );
    }

    #[test]
    fn options_come_out_in_fixed_order() {
        let params = ExtractParams {
            executable: Some("/opt/pdfimages".into()),
            config_file: Some("xpdfrc".into()),
            last_page: Some(3),
            format: ImageFormat::Raw,
            owner_password: Some("owner".into()),
            user_password: Some("user".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_options(),
            vec![
                CommandOption::CustomPath("/opt/pdfimages".into()),
                CommandOption::CustomConfig("xpdfrc".into()),
                CommandOption::PageTo(3),
                CommandOption::SaveRaw,
                CommandOption::OwnerPassword("owner".into()),
                CommandOption::UserPassword("user".into()),
            ]
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params =
            ExtractParams::from_json_str(r#"{ "format": "jpeg", "timeout_secs": 30 }"#).unwrap();
        assert_eq!(params.format, ImageFormat::Jpeg);
        assert_eq!(params.timeout(), Some(Duration::from_secs(30)));
        assert!(params.executable.is_none());
    }

    #[test]
    fn unknown_format_is_a_config_error() {
        let err = ExtractParams::from_json_str(r#"{ "format": "png" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn json_file_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{ not json").unwrap();
        let err = ExtractParams::from_json_file(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&file.path().display().to_string()), "{msg}");
    }
}
