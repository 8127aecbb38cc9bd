//! Application context
//!
//! Everything the menu/button handlers need, passed explicitly.

use std::path::{Path, PathBuf};

use crate::convert::{ConversionMode, ConvertError, Converter};
use crate::minigame::Minigame;
use crate::settings::Settings;

/// Settings plus the converter they configure
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    converter: Converter,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        let converter = Converter::new(settings.converter_path.clone());
        Self {
            settings,
            converter,
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Show the progress animation (if enabled), then convert `input`
    pub fn convert(
        &self,
        mode: ConversionMode,
        input: &Path,
        on_progress: impl FnMut(f32),
    ) -> Result<PathBuf, ConvertError> {
        if self.settings.progress_animation {
            self.settings.progress().play(on_progress);
        }

        match self.converter.run(mode, input) {
            Ok(output) => {
                log::info!("Converted to {}", output.display());
                Ok(output)
            }
            Err(err) => {
                log::error!("Conversion failed: {}", err);
                Err(err)
            }
        }
    }

    /// Start the credits minigame
    pub fn credits(&self, fallback_seed: u64) -> Minigame {
        Minigame::new(self.settings.minigame_seed.unwrap_or(fallback_seed))
    }
}
