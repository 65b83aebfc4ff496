use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use serde::{Serialize, Deserialize};

use crate::core::head_bob_error::HeadBobError;

/// User-facing head bob options.
#[derive(Resource, Serialize, Deserialize, Reflect, InspectorOptions, Debug, Clone, PartialEq)]
#[reflect(Resource, InspectorOptions)]
#[serde(default)]
pub struct HeadBobSettings {
    pub enabled: bool,
    // multiplier applied to every style's sway and bounce
    #[inspector(min = 0.0, max = 3.0)]
    pub bob_scalar: f32,
}

impl Default for HeadBobSettings {
    fn default() -> Self {
        HeadBobSettings {
            enabled: true,
            bob_scalar: 1.0,
        }
    }
}

impl HeadBobSettings {
    pub fn from_ron_str(source: &str) -> Result<Self, HeadBobError> {
        let settings: HeadBobSettings = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, HeadBobError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    pub fn validate(&self) -> Result<(), HeadBobError> {
        if !self.bob_scalar.is_finite() || self.bob_scalar < 0.0 {
            return Err(HeadBobError::InvalidSetting(format!(
                "bob_scalar must be a non-negative number, got {}",
                self.bob_scalar
            )));
        }
        Ok(())
    }
}

// Location of a RON settings file read once at startup.
#[derive(Resource, Debug, Clone)]
pub struct HeadBobSettingsPath(pub PathBuf);

pub(crate) fn load_head_bob_settings(
    path: Option<Res<HeadBobSettingsPath>>,
    mut settings: ResMut<HeadBobSettings>,
) {
    let Some(path) = path else {
        return;
    };

    match HeadBobSettings::load_from_path(&path.0) {
        Ok(loaded) => {
            info!("Loaded head bob settings from {:?}", path.0);
            *settings = loaded;
        }
        Err(error) => {
            warn!("{}; keeping defaults", error);
        }
    }
}
