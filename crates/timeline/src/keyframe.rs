//! Keyframes: timestamped target values for animatable clip properties.

use serde::{Deserialize, Serialize};

/// Clip properties that can be animated with keyframes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyframeProperty {
    Opacity,
    Scale,
    Rotation,
    X,
    Y,
}

/// A single keyframe on one animatable property.
///
/// `time` is clip-local (relative to the clip's `start_offset`). For a fixed
/// clip and property no two keyframes share the same time; inserting at an
/// existing time replaces the prior keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Unique keyframe identifier.
    pub id: String,
    /// Time relative to clip start, in seconds.
    pub time: f64,
    /// Which property this keyframe animates.
    pub property: KeyframeProperty,
    /// Target value at this time.
    pub value: f64,
}

impl Keyframe {
    pub fn new(id: impl Into<String>, time: f64, property: KeyframeProperty, value: f64) -> Self {
        Self {
            id: id.into(),
            time,
            property,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_deserialize_roundtrip() {
        let kf = Keyframe::new("kf_1", 2.5, KeyframeProperty::Opacity, 0.5);
        let json = serde_json::to_string(&kf).unwrap();
        let restored: Keyframe = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, kf);
    }
}
