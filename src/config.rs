//! # Unified Application Configuration
//!
//! This module provides a centralized configuration system that consolidates
//! all application settings into a single, structured configuration object.
//! It supports loading from environment variables, validation, and provides
//! a clean interface for accessing configuration throughout the application.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Bot-specific configuration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Telegram bot token
    pub token: String,
}

impl BotConfig {
    /// Validate bot configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.token.trim().is_empty() {
            return Err(AppError::Config("Bot token cannot be empty".to_string()));
        }

        // Basic bot token format validation
        if !self.token.contains(':') {
            return Err(AppError::Config(
                "Bot token format is invalid. Expected format: 'bot_id:bot_token'".to_string(),
            ));
        }

        let parts: Vec<&str> = self.token.split(':').collect();
        if parts.len() != 2 {
            return Err(AppError::Config(
                "Bot token format is invalid. Expected format: 'bot_id:bot_token'".to_string(),
            ));
        }

        // Validate bot ID is numeric
        if parts[0].parse::<u64>().is_err() {
            return Err(AppError::Config(
                "Bot token bot ID must be numeric".to_string(),
            ));
        }

        // Validate bot token length
        if parts[1].len() < 20 {
            return Err(AppError::Config(
                "Bot token appears to be too short. Please verify it's a valid token".to_string(),
            ));
        }

        Ok(())
    }
}

/// Upstream job-listings API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the job-listings API
    pub base_url: String,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Number of jobs shown per list page
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 10,
            page_size: 10,
        }
    }
}

impl ApiConfig {
    /// Validate API client configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("API base URL cannot be empty".to_string()));
        }

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => {
                return Err(AppError::Config(
                    "API base URL must be a valid http(s) URL".to_string(),
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("API timeout cannot be 0".to_string()));
        }

        if self.timeout_secs > 300 {
            return Err(AppError::Config(
                "API timeout cannot be greater than 300 seconds".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(AppError::Config("Page size cannot be 0".to_string()));
        }

        if self.page_size > 50 {
            return Err(AppError::Config(
                "Page size cannot be greater than 50".to_string(),
            ));
        }

        Ok(())
    }
}

/// Main application configuration containing all subsystem configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot configuration
    pub bot: BotConfig,
    /// Job-listings API configuration
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        // Load bot configuration
        config.bot.token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            AppError::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })?;

        // Load API client configuration
        let base_url = env::var("API_BASE_URL").map_err(|_| {
            AppError::Config("API_BASE_URL environment variable is required".to_string())
        })?;
        config.api.base_url = base_url.trim_end_matches('/').to_string();
        config.api.timeout_secs = env::var("API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("API_TIMEOUT_SECS must be a valid number of seconds".to_string())
            })?;
        config.api.page_size = env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| AppError::Config("PAGE_SIZE must be a valid number".to_string()))?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.bot.validate()?;
        self.api.validate()?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: bot_token=[REDACTED], api_base_url={}, api_timeout_secs={}, page_size={}",
            self.api.base_url, self.api.timeout_secs, self.api.page_size
        )
    }
}
