//! Keyframe sampling: property values as piecewise-linear functions of
//! clip-local time.

use lumina_timeline::{Clip, KeyframeProperty};

/// The clip's static (non-animated) value for `property`.
pub fn base_value(clip: &Clip, property: KeyframeProperty) -> f64 {
    match property {
        KeyframeProperty::Opacity => clip.opacity,
        KeyframeProperty::Scale => clip.scale,
        KeyframeProperty::Rotation => clip.rotation,
        KeyframeProperty::X => clip.x,
        KeyframeProperty::Y => clip.y,
    }
}

/// Sample `property` at clip-local `time`.
///
/// With no keyframes on the property the static clip value applies. With
/// keyframes, the value is clamped to the first keyframe before it, clamped
/// to the last after it, and linearly interpolated between the two
/// neighbouring keyframes in between. Keyframes fully override the static
/// value, they do not offset it.
pub fn animated_value(clip: &Clip, property: KeyframeProperty, time: f64) -> f64 {
    let mut prev = None;
    let mut next = None;
    for kf in clip.keyframes_for(property) {
        if kf.time <= time {
            prev = Some(kf);
        } else {
            next = Some(kf);
            break;
        }
    }

    match (prev, next) {
        (None, None) => base_value(clip, property),
        (Some(kf), None) | (None, Some(kf)) => kf.value,
        (Some(a), Some(b)) => {
            let span = b.time - a.time;
            if span <= 0.0 {
                return b.value;
            }
            let t = (time - a.time) / span;
            a.value + (b.value - a.value) * t
        }
    }
}

/// Opacity multiplier from the clip's fade-in/fade-out ramps at clip-local
/// `time`, in `[0, 1]`.
pub fn fade_envelope(clip: &Clip, time: f64) -> f64 {
    let mut factor: f64 = 1.0;
    if clip.fade_in > 0.0 && time < clip.fade_in {
        factor = factor.min((time / clip.fade_in).max(0.0));
    }
    let from_end = clip.duration - time;
    if clip.fade_out > 0.0 && from_end < clip.fade_out {
        factor = factor.min((from_end / clip.fade_out).max(0.0));
    }
    factor
}
