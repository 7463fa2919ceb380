//! Waveform extraction for timeline clip rendering.

/// Reduce raw PCM samples to `buckets` normalized peak magnitudes.
///
/// Each bucket is the mean absolute amplitude of its slice of samples,
/// normalized so the loudest bucket is 1.0. Quiet recordings therefore still
/// render a full-height waveform.
pub fn extract_peaks(samples: &[f32], buckets: usize) -> Vec<f32> {
    if samples.is_empty() || buckets == 0 {
        return flat_fallback(buckets);
    }

    let chunk = (samples.len() / buckets).max(1);
    let mut peaks: Vec<f32> = (0..buckets)
        .map(|i| {
            let start = i * chunk;
            if start >= samples.len() {
                return 0.0;
            }
            let end = (start + chunk).min(samples.len());
            let slice = &samples[start..end];
            slice.iter().map(|s| s.abs()).sum::<f32>() / slice.len() as f32
        })
        .collect();

    let max = peaks.iter().cloned().fold(0.0_f32, f32::max);
    if max > 0.0 {
        for p in &mut peaks {
            *p /= max;
        }
    }
    peaks
}

/// Placeholder waveform for sources whose samples cannot be decoded: a low
/// flat line, visibly distinct from real audio.
pub fn flat_fallback(buckets: usize) -> Vec<f32> {
    vec![0.1; buckets]
}
