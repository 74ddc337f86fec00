use std::fs;
use std::path::Path;

use serde::Deserialize;
use shotdiff_image::Rgb;

pub use shotdiff_image::CompareOptions;

use crate::{OperationError, Result};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    compare: CompareSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct CompareSection {
    threshold: Option<f64>,
    anti_aliasing: Option<bool>,
    diff_alpha: Option<f64>,
    diff_color: Option<Rgb>,
    diff_color_alt: Option<Rgb>,
    aa_color: Option<Rgb>,
}

/// Settings given on the command line; they win over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub threshold: Option<f64>,
    pub anti_aliasing: Option<bool>,
}

impl CompareSection {
    fn apply(&self, mut options: CompareOptions) -> CompareOptions {
        if let Some(threshold) = self.threshold {
            options = options.with_threshold(threshold);
        }
        if let Some(enabled) = self.anti_aliasing {
            options = options.with_anti_aliasing_detection(enabled);
        }
        if let Some(alpha) = self.diff_alpha {
            options = options.with_diff_alpha(alpha);
        }
        if let Some(color) = self.diff_color {
            options = options.with_diff_color(color);
        }
        if self.diff_color_alt.is_some() {
            options = options.with_diff_color_alt(self.diff_color_alt);
        }
        if let Some(color) = self.aa_color {
            options = options.with_aa_color(color);
        }
        options
    }
}

impl ConfigOverrides {
    fn apply(&self, mut options: CompareOptions) -> CompareOptions {
        if let Some(threshold) = self.threshold {
            options = options.with_threshold(threshold);
        }
        if let Some(enabled) = self.anti_aliasing {
            options = options.with_anti_aliasing_detection(enabled);
        }
        options
    }
}

/// Parses the `[compare]` table of a config file on top of the defaults.
///
/// # Errors
///
/// Returns [`OperationError::ConfigParse`] for malformed TOML or unknown
/// keys, and a validation error for out-of-range values.
pub fn parse_config(content: &str, path: &Path) -> Result<CompareOptions> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| OperationError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(file.compare.apply(CompareOptions::default()))
}

/// Builds the comparison options from the defaults, the optional config
/// file, and command-line overrides, in that order of precedence.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed, or if the
/// resulting values are out of range.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<CompareOptions> {
    let options = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| OperationError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&content, path)?
        }
        None => CompareOptions::default(),
    };

    validate(overrides.apply(options))
}

/// Rejects thresholds and alpha values outside `[0, 1]`.
///
/// # Errors
///
/// Returns [`OperationError::InvalidThreshold`] or
/// [`OperationError::InvalidAlpha`].
pub fn validate(options: CompareOptions) -> Result<CompareOptions> {
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(OperationError::InvalidThreshold(options.threshold));
    }
    if !(0.0..=1.0).contains(&options.diff_alpha) {
        return Err(OperationError::InvalidAlpha(options.diff_alpha));
    }
    Ok(options)
}
