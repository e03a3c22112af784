use crate::core::landmarks::hud_targets;
use crate::core::{PointOfInterest, DEFAULT_FOV_DEG, DEFAULT_HUD_MARGIN, DEFAULT_SPIN_DURATION_MS};
use crate::hardware::WatchOptions;
use crate::validation::CoordinateValidator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Overlay-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Full angular width of the HUD cone (degrees)
    pub fov_deg: f64,
    /// Gap between the outermost marker position and the HUD edge
    pub hud_margin: f64,
    /// Position watch options
    pub watch: WatchOptions,
    /// Globe rendering parameters
    pub globe: GlobeConfig,
    /// Points of interest shown on the HUD
    pub pois: Vec<PointOfInterest>,
}

/// Globe model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub radius: f64,
    /// Height of dataset markers above the surface
    pub marker_altitude: f64,
    /// Height of the user marker above the surface
    pub user_altitude: f64,
    pub spin_duration_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            hud_margin: DEFAULT_HUD_MARGIN,
            watch: WatchOptions::default(),
            globe: GlobeConfig::default(),
            pois: hud_targets(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            marker_altitude: 0.02,
            user_altitude: 0.03,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no file path set for saving configuration")]
    NoPath,
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn invalid(&mut self, parameter: &str, value: impl ToString, reason: &str) {
        self.errors.push(ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        });
    }

    fn into_first_error(self) -> Option<ConfigError> {
        self.errors.into_iter().next()
    }
}

/// Validate an overlay configuration
pub fn validate_config(config: &OverlayConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !(config.fov_deg > 0.0 && config.fov_deg <= 360.0) {
        result.invalid("fov_deg", config.fov_deg, "field of view must be in (0, 360]");
    } else if config.fov_deg > 120.0 {
        result.warnings.push("very wide field of view compresses markers towards the centre".to_string());
    }

    if !(config.hud_margin >= 0.0) {
        result.invalid("hud_margin", config.hud_margin, "margin must be non-negative");
    }

    if config.watch.timeout_ms == 0 {
        result.invalid("watch.timeout_ms", config.watch.timeout_ms, "timeout must be positive");
    }

    if !(config.globe.radius > 0.0) {
        result.invalid("globe.radius", config.globe.radius, "radius must be positive");
    }

    for (i, poi) in config.pois.iter().enumerate() {
        if let Err(issue) = CoordinateValidator::validate_point(&poi.point) {
            result.invalid(&format!("pois[{}]", i), &poi.name, &format!("{:?}", issue));
        }
    }

    if config.pois.is_empty() {
        result.warnings.push("no points of interest configured".to_string());
    }

    result
}

/// Loads, validates and persists the overlay configuration
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: OverlayConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the configuration if it validates
    pub fn update(&mut self, config: OverlayConfig) -> Result<(), ConfigError> {
        let validation = validate_config(&config);
        if let Some(error) = validation.into_first_error() {
            return Err(error);
        }

        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    pub fn set_fov(&mut self, fov_deg: f64) -> Result<f64, ConfigError> {
        let old = self.config.fov_deg;
        let mut next = self.config.clone();
        next.fov_deg = fov_deg;
        self.update(next)?;
        Ok(old)
    }

    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) -> Result<(), ConfigError> {
        let mut next = self.config.clone();
        next.pois = pois;
        self.update(next)
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: OverlayConfig = serde_json::from_str(&content)?;

        let validation = validate_config(&config);
        for warning in &validation.warnings {
            warn!(path = %path.display(), "{}", warning);
        }
        if let Some(error) = validation.into_first_error() {
            return Err(error);
        }

        info!(path = %path.display(), pois = config.pois.len(), "loaded overlay configuration");
        self.config = config;
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.config)?;

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!(path = %path.display(), "saved overlay configuration");
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was last loaded from or saved to
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::NoPath),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }
}
