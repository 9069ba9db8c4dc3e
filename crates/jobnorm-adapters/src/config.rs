use jobnorm_core::{AppError, DateNormalizer, NormalizeConfig};

/// Settings shared by every provider adapter.
#[derive(Debug, Clone, Default)]
pub struct AdapterConfig {
    /// Provider-side company slug, used to build a canonical URL when the
    /// payload does not carry one.
    pub board: Option<String>,
    pub normalize: NormalizeConfig,
}

impl AdapterConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JOBNORM_BOARD` (optional)
    /// - `JOBNORM_FUTURE_TOLERANCE_SECS` (optional, defaults to 0)
    pub fn from_env() -> Result<Self, AppError> {
        let board = std::env::var("JOBNORM_BOARD")
            .ok()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        Ok(Self {
            board,
            normalize: NormalizeConfig::from_env()?,
        })
    }

    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub(crate) fn date_normalizer(&self) -> DateNormalizer {
        DateNormalizer::new(self.normalize.clone())
    }
}
