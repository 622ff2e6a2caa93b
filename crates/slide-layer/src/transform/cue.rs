#![forbid(unsafe_code)]

//! Piecewise-linear interpolation over cue points.

/// Interpolate `values` spaced evenly across [0, 1] at `progress`.
///
/// With two values this is a plain lerp.
#[must_use]
pub fn value_for_cue_points(progress: f32, values: &[f32]) -> f32 {
    match values.len() {
        0 => 0.0,
        1 => values[0],
        n => {
            let step = 1.0 / (n - 1) as f32;
            if progress <= 0.0 {
                return values[0];
            }
            for i in 1..n {
                let cue = i as f32 * step;
                if progress <= cue {
                    let t = (progress - (cue - step)) / step;
                    return values[i - 1] + (values[i] - values[i - 1]) * t;
                }
            }
            values[n - 1]
        }
    }
}

/// Interpolate `values` placed at ascending `cues` at `progress`.
///
/// Outside the cue range the first or last value is held. Extra entries
/// in the longer slice are ignored.
#[must_use]
pub fn value_for_range(progress: f32, cues: &[f32], values: &[f32]) -> f32 {
    let n = cues.len().min(values.len());
    if n == 0 {
        return 0.0;
    }
    if progress <= cues[0] || n == 1 {
        return values[0];
    }
    for i in 1..n {
        if progress <= cues[i] {
            let span = cues[i] - cues[i - 1];
            if span <= 0.0 {
                return values[i];
            }
            let t = (progress - cues[i - 1]) / span;
            return values[i - 1] + (values[i] - values[i - 1]) * t;
        }
    }
    values[n - 1]
}
