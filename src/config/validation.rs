use crate::config::types::{Config, OutputConfig, SiteEntry};
use crate::url::normalize_base_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_output_config(&config.output)?;
    validate_sites(&config.sites)?;
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.report_dir.is_empty() {
        return Err(ConfigError::Validation(
            "report-dir cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the site list
fn validate_sites(sites: &[SiteEntry]) -> Result<(), ConfigError> {
    if sites.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[site]] entry is required".to_string(),
        ));
    }

    for site in sites {
        if site.name.is_empty() {
            return Err(ConfigError::Validation(
                "site name cannot be empty".to_string(),
            ));
        }

        if site
            .name
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.')
        {
            return Err(ConfigError::Validation(format!(
                "site name '{}' may only contain alphanumerics, '-', '_', and '.' \
                 (it becomes a report file name)",
                site.name
            )));
        }

        if site.robots_path.is_empty() {
            return Err(ConfigError::Validation(format!(
                "site '{}' has an empty robots-path",
                site.name
            )));
        }

        if let Some(base_url) = &site.base_url {
            normalize_base_url(base_url)
                .map_err(|e| ConfigError::InvalidUrl(format!("site '{}': {}", site.name, e)))?;
        }
    }

    // Duplicate names would overwrite each other's reports
    for (index, site) in sites.iter().enumerate() {
        if sites[..index].iter().any(|other| other.name == site.name) {
            return Err(ConfigError::Validation(format!(
                "duplicate site name '{}'",
                site.name
            )));
        }
    }

    Ok(())
}
