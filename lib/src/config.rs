/// Default output width in characters when no usable width is given
pub const DEFAULT_COLUMNS: u32 = 50;

/// Height correction for terminal cells being roughly twice as tall as wide
pub const CHAR_ASPECT: f32 = 0.5;

/// Configuration for one render run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in characters, default 50
    pub columns: u32,
    /// Vertical scale applied to the aspect ratio, default 0.5
    pub char_aspect: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            char_aspect: CHAR_ASPECT,
        }
    }
}

impl RenderConfig {
    /// Builds a config from a raw command-line width argument.
    ///
    /// Anything that is absent, not an integer, or not positive falls back to
    /// [`DEFAULT_COLUMNS`]. There is no upper bound.
    pub fn from_width_arg(arg: Option<&str>) -> Self {
        let columns = arg
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_COLUMNS);

        Self {
            columns,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.columns == 0 {
            return Err(format!("columns must be positive, got {}", self.columns));
        }
        if self.char_aspect <= 0.0 || self.char_aspect > 10.0 {
            return Err(format!(
                "char_aspect must be in (0.0, 10.0], got {}",
                self.char_aspect
            ));
        }
        Ok(())
    }
}
