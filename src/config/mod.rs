//! Config domain: movement tuning loaded from a RON file at startup.

use std::path::Path;

use bevy::prelude::*;

use crate::movement::MovementTuning;

mod data;
mod loader;
mod validation;

use loader::TuningLoadError;

/// Tuning file path, relative to the working directory.
const TUNING_PATH: &str = "assets/config/movement.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // A present-but-unusable tuning file is fatal; the app must not start
        match startup_tuning(Path::new(TUNING_PATH)) {
            Ok(tuning) => app.insert_resource(tuning),
            Err(e) => panic!("{e}"),
        };
    }
}

/// Resolve the movement tuning for this run. A missing file falls back to
/// defaults; a file that fails to parse or validate is a configuration error.
fn startup_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    if !path.exists() {
        warn!(
            "{} not found, using default movement tuning",
            path.display()
        );
        return Ok(MovementTuning::default());
    }

    let def = loader::load_tuning_file(path)?;

    let errors = validation::validate_tuning(&def);
    if !errors.is_empty() {
        for error in &errors {
            error!("{error}");
        }
        let details = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TuningLoadError {
            file: path.display().to_string(),
            message: format!("Validation error: {}", details),
        });
    }

    info!("Loaded movement tuning from {}", path.display());
    Ok(def.into())
}
