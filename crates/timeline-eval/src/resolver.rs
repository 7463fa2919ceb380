//! Active-clip resolution: which clips participate in a frame at time `t`.

use lumina_timeline::{Clip, Track, TrackKind};

/// Rendering policy the resolver applies on top of the raw interval test.
#[derive(Copy, Clone, Debug)]
pub struct ResolvePolicy {
    /// When set, muting a visual track also removes its clips from the
    /// composited output.
    pub mute_hides_visual: bool,
}

impl Default for ResolvePolicy {
    fn default() -> Self {
        Self {
            mute_hides_visual: true,
        }
    }
}

/// Mute-as-hide applies only to visual tracks; a muted audio track silences
/// its clips but never hides anything.
fn visual_track_muted(tracks: &[Track], track_id: usize) -> bool {
    tracks
        .get(track_id)
        .is_some_and(|t| t.kind == TrackKind::Visual && t.muted)
}

/// Visual clips active at `time`, in painting order: higher track indices
/// first, so lower tracks composite on top.
pub fn active_visual_clips<'a>(
    clips: &'a [Clip],
    tracks: &[Track],
    time: f64,
    policy: ResolvePolicy,
) -> Vec<&'a Clip> {
    let mut active: Vec<&Clip> = clips
        .iter()
        .filter(|c| c.kind.is_visual() && c.is_active_at(time))
        .filter(|c| !(policy.mute_hides_visual && visual_track_muted(tracks, c.track_id)))
        .collect();
    active.sort_by(|a, b| b.track_id.cmp(&a.track_id));
    active
}

/// Media-backed clips (audio and video) active at `time`. Hide policy and
/// track mute never filter this set: a hidden or silenced clip's media
/// element still has to track the timeline clock, so its position is right
/// the moment it becomes visible or audible again. Silencing is a volume
/// decision, made downstream.
pub fn active_media_clips<'a>(clips: &'a [Clip], time: f64) -> Vec<&'a Clip> {
    clips
        .iter()
        .filter(|c| c.kind.has_media() && c.is_active_at(time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_timeline::ClipKind;

    fn make_clip(id: &str, kind: ClipKind, start: f64, duration: f64, track: usize) -> Clip {
        Clip::new(id, kind, id, start, duration, track)
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n).map(|i| Track::new(i, TrackKind::Visual)).collect()
    }

    #[test]
    fn filters_by_half_open_interval() {
        let clips = vec![
            make_clip("a", ClipKind::Video, 0.0, 5.0, 0),
            make_clip("b", ClipKind::Video, 5.0, 5.0, 0),
        ];
        let tracks = tracks(1);

        let at_5 = active_visual_clips(&clips, &tracks, 5.0, ResolvePolicy::default());
        assert_eq!(at_5.len(), 1);
        assert_eq!(at_5[0].id, "b");
    }

    #[test]
    fn audio_clips_are_not_visual_layers() {
        let clips = vec![
            make_clip("v", ClipKind::Video, 0.0, 5.0, 0),
            make_clip("a", ClipKind::Audio, 0.0, 5.0, 2),
        ];
        let tracks = tracks(3);

        let visual = active_visual_clips(&clips, &tracks, 1.0, ResolvePolicy::default());
        assert_eq!(visual.len(), 1);
        assert_eq!(visual[0].id, "v");
    }

    #[test]
    fn media_set_covers_audio_and_video_but_not_stills() {
        let clips = vec![
            make_clip("v", ClipKind::Video, 0.0, 5.0, 0),
            make_clip("i", ClipKind::Image, 0.0, 5.0, 1),
            make_clip("t", ClipKind::Text, 0.0, 5.0, 1),
            make_clip("a", ClipKind::Audio, 0.0, 5.0, 2),
        ];

        let media = active_media_clips(&clips, 1.0);
        let ids: Vec<&str> = media.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["v", "a"]);
    }

    #[test]
    fn painting_order_is_back_to_front() {
        let clips = vec![
            make_clip("top", ClipKind::Text, 0.0, 5.0, 0),
            make_clip("mid", ClipKind::Image, 0.0, 5.0, 1),
            make_clip("back", ClipKind::Video, 0.0, 5.0, 2),
        ];
        let tracks = tracks(3);

        let layers = active_visual_clips(&clips, &tracks, 1.0, ResolvePolicy::default());
        let ids: Vec<&str> = layers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["back", "mid", "top"]);
    }

    #[test]
    fn muted_visual_track_hides_when_policy_set() {
        let clips = vec![make_clip("v", ClipKind::Video, 0.0, 5.0, 0)];
        let mut tracks = tracks(1);
        tracks[0].muted = true;

        let hidden = active_visual_clips(&clips, &tracks, 1.0, ResolvePolicy::default());
        assert!(hidden.is_empty());

        let shown = active_visual_clips(
            &clips,
            &tracks,
            1.0,
            ResolvePolicy {
                mute_hides_visual: false,
            },
        );
        assert_eq!(shown.len(), 1);
    }

    #[test]
    fn muted_audio_track_never_hides_visual_clips() {
        // A visual clip dragged onto an audio-kind track stays rendered even
        // when that track is muted; mute-as-hide is a visual-track rule.
        let clips = vec![make_clip("v", ClipKind::Video, 0.0, 5.0, 2)];
        let mut tracks = tracks(2);
        tracks.push(Track::new(2, TrackKind::Audio));
        tracks[2].muted = true;

        let shown = active_visual_clips(&clips, &tracks, 1.0, ResolvePolicy::default());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "v");
    }

    #[test]
    fn muted_track_keeps_media_scheduled() {
        let clips = vec![make_clip("a", ClipKind::Audio, 0.0, 5.0, 0)];
        let media = active_media_clips(&clips, 1.0);
        assert_eq!(media.len(), 1);
    }
}
