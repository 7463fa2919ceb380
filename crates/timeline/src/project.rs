//! Project settings: name, canvas aspect ratio, initialization flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canvas aspect ratio for the composition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 landscape.
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    /// 9:16 portrait (vertical video).
    #[serde(rename = "9:16")]
    Tall,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
    /// 4:5 portrait.
    #[serde(rename = "4:5")]
    Portrait,
    /// 21:9 cinematic widescreen.
    #[serde(rename = "21:9")]
    Cinema,
}

impl AspectRatio {
    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Wide => 16.0 / 9.0,
            AspectRatio::Tall => 9.0 / 16.0,
            AspectRatio::Square => 1.0,
            AspectRatio::Portrait => 4.0 / 5.0,
            AspectRatio::Cinema => 21.0 / 9.0,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "4:5",
            AspectRatio::Cinema => "21:9",
        };
        write!(f, "{s}")
    }
}

/// Project-level settings.
///
/// Created once at startup via an explicit initialization action. The aspect
/// ratio is immutable afterwards except through a history snapshot restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display name of the project.
    pub name: String,
    /// Canvas aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Whether the project has been explicitly initialized.
    pub initialized: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            aspect_ratio: AspectRatio::Wide,
            initialized: false,
        }
    }
}

impl Project {
    /// Initialize the project with a name and aspect ratio.
    pub fn init(&mut self, name: impl Into<String>, aspect_ratio: AspectRatio) {
        self.name = name.into();
        self.aspect_ratio = aspect_ratio;
        self.initialized = true;
    }
}
