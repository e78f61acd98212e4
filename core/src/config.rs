//! Importer and reporter configuration types

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Literal prefix of every importer output file name
pub const OUTPUT_PREFIX: &str = "dados_reais_";

/// Algorithm used as the speedup baseline
pub const DEFAULT_BASELINE: &str = "std::sort";

/// Results files probed when no input is given, in order of preference
pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "../dados/resultados_artigo_oficial.csv",
    "resultados_completos.csv",
    "../dados/resultados_completos.csv",
    "dados/resultados_artigo_oficial.csv",
];

/// Spreadsheet importer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Directory that receives converted datasets when no output path is given
    pub data_dir: PathBuf,

    /// Number of values shown per numeric column in inspection mode
    pub sample_size: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("../dados"),
            sample_size: 3,
        }
    }
}

impl ImportConfig {
    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Output path derived from the spreadsheet's file stem
    pub fn default_output_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.data_dir.join(format!("{OUTPUT_PREFIX}{stem}.csv"))
    }
}

/// Chart appearance shared by every plot
///
/// Built once at startup and handed to each chart function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Font family for captions and labels
    pub font_family: String,
    /// Caption font size
    pub caption_size: u32,
    /// Axis label font size
    pub label_size: u32,
    /// Stroke width of series lines
    pub line_width: u32,
    /// Radius of series markers
    pub marker_size: u32,
    /// HSL saturation of the series palette (0.0-1.0)
    pub saturation: f64,
    /// HSL lightness of the series palette (0.0-1.0)
    pub lightness: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
            font_family: "sans-serif".to_string(),
            caption_size: 32,
            label_size: 16,
            line_width: 2,
            marker_size: 4,
            saturation: 0.65,
            lightness: 0.5,
        }
    }
}

impl ChartStyle {
    /// Set the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate the style
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidStyle(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        for (name, value) in [("saturation", self.saturation), ("lightness", self.lightness)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidStyle(format!(
                    "{name} must be within 0.0-1.0, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Benchmark reporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory that receives every generated artifact
    pub output_dir: PathBuf,

    /// Results files probed in order when loading
    pub candidate_paths: Vec<PathBuf>,

    /// Algorithm the speedup table is relative to
    pub baseline: String,

    /// Points sampled along each complexity reference curve
    pub curve_samples: usize,

    /// Observations an algorithm needs before a reference curve is drawn
    pub min_fit_points: usize,

    /// Chart appearance
    pub style: ChartStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            candidate_paths: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            baseline: DEFAULT_BASELINE.to_string(),
            curve_samples: 100,
            min_fit_points: 3,
            style: ChartStyle::default(),
        }
    }
}

impl ReportConfig {
    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Put a caller-supplied path in front of the candidate list
    pub fn with_preferred_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidate_paths.insert(0, path.into());
        self
    }

    /// Set the chart style
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Path of an artifact inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidate_paths.is_empty() {
            return Err(ConfigError::InvalidCandidates(
                "at least one candidate path is required".into(),
            ));
        }

        if self.baseline.trim().is_empty() {
            return Err(ConfigError::InvalidBaseline(
                "baseline algorithm name must not be empty".into(),
            ));
        }

        if self.curve_samples < 2 {
            return Err(ConfigError::InvalidCurve(format!(
                "curve_samples must be at least 2, got {}",
                self.curve_samples
            )));
        }

        if self.min_fit_points == 0 {
            return Err(ConfigError::InvalidCurve(
                "min_fit_points must be at least 1".into(),
            ));
        }

        self.style.validate()
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be parsed
    #[error("Invalid configuration file: {0}")]
    Parse(String),

    /// Empty candidate list
    #[error("Invalid candidate paths: {0}")]
    InvalidCandidates(String),

    /// Unusable baseline name
    #[error("Invalid baseline: {0}")]
    InvalidBaseline(String),

    /// Bad reference curve parameters
    #[error("Invalid complexity curve: {0}")]
    InvalidCurve(String),

    /// Bad chart style
    #[error("Invalid chart style: {0}")]
    InvalidStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_report_config() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.candidate_paths.len(), 4);
        assert_eq!(
            config.candidate_paths[0],
            PathBuf::from("../dados/resultados_artigo_oficial.csv")
        );
        assert_eq!(config.baseline, "std::sort");
        assert_eq!(config.curve_samples, 100);
        assert_eq!(config.min_fit_points, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preferred_input_is_tried_first() {
        let config = ReportConfig::default().with_preferred_input("mine.csv");
        assert_eq!(config.candidate_paths.len(), 5);
        assert_eq!(config.candidate_paths[0], PathBuf::from("mine.csv"));
        assert_eq!(
            config.candidate_paths[1],
            PathBuf::from("../dados/resultados_artigo_oficial.csv")
        );
    }

    #[test]
    fn test_default_output_for_spreadsheet() {
        let config = ImportConfig::default();
        let path = config.default_output_for(Path::new("/tmp/planilhas/Inventario 2024.xlsx"));
        assert_eq!(
            path,
            PathBuf::from("../dados/dados_reais_Inventario 2024.csv")
        );

        let config = ImportConfig::default().with_data_dir("out");
        let path = config.default_output_for(Path::new("vendas.xls"));
        assert_eq!(path, PathBuf::from("out/dados_reais_vendas.csv"));
    }

    #[test]
    fn test_config_validation_empty_candidates() {
        let config = ReportConfig {
            candidate_paths: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCandidates(_))
        ));
    }

    #[test]
    fn test_config_validation_curve_samples() {
        let config = ReportConfig {
            curve_samples: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCurve(_))));
    }

    #[test]
    fn test_style_validation() {
        let style = ChartStyle::default().with_size(0, 600);
        assert!(style.validate().is_err());

        let style = ChartStyle {
            lightness: 1.5,
            ..Default::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_config_from_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"output_dir": "graficos", "style": {{"width": 800, "height": 600}}}}"#
        )
        .unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("graficos"));
        assert_eq!(config.style.width, 800);
        assert_eq!(config.style.height, 600);
        assert_eq!(config.style.font_family, "sans-serif");
        assert_eq!(config.baseline, "std::sort");
    }

    #[test]
    fn test_config_from_file_rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ReportConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Config(ConfigError::Parse(_))));
    }
}
