use crate::assessment::{CatalogError, QuestionCatalog};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for a host embedding the assessment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub questionnaire: QuestionnaireConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let definition_path = env::var("APP_QUESTIONNAIRE_PATH")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        if let Some(path) = &definition_path {
            if !path.is_file() {
                return Err(ConfigError::MissingQuestionnaire { path: path.clone() });
            }
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            questionnaire: QuestionnaireConfig { definition_path },
            telemetry: TelemetryConfig { log_level },
        })
    }

    pub fn catalog(&self) -> Result<QuestionCatalog, ConfigError> {
        self.questionnaire.catalog()
    }
}

/// Where the question catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireConfig {
    /// JSON questionnaire definition; the built-in catalog when unset.
    pub definition_path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    pub fn catalog(&self) -> Result<QuestionCatalog, ConfigError> {
        match &self.definition_path {
            Some(path) => {
                QuestionCatalog::from_path(path).map_err(|source| ConfigError::InvalidQuestionnaire {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(QuestionCatalog::standard()),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingQuestionnaire { path: PathBuf },
    InvalidQuestionnaire { path: PathBuf, source: CatalogError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingQuestionnaire { path } => write!(
                f,
                "APP_QUESTIONNAIRE_PATH points to '{}', which is not a readable file",
                path.display()
            ),
            ConfigError::InvalidQuestionnaire { path, .. } => {
                write!(f, "questionnaire definition '{}' is invalid", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::MissingQuestionnaire { .. } => None,
            ConfigError::InvalidQuestionnaire { source, .. } => Some(source),
        }
    }
}
