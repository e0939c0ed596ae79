//! Wind rose construction from the site configuration.

use crate::config::SiteConfig;

/// Direction/speed axes and the joint occurrence frequency of each bin.
///
/// Frequencies are normalized to sum to 1. Direction weighting is a cosine
/// lobe around the prevailing direction; speed weighting follows a Weibull
/// density evaluated at the bin centers.
#[derive(Debug, Clone)]
pub struct Site {
    directions_deg: Vec<f32>,
    speeds_ms: Vec<f32>,
    /// `freq[d][s]`, aligned with the axis vectors.
    freq: Vec<Vec<f32>>,
}

impl Site {
    /// Builds the wind rose from a validated site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        let directions_deg = direction_axis(config.direction_step_deg);
        let speeds_ms = speed_axis(config.speed_min_ms, config.speed_max_ms, config.speed_step_ms);

        let mut freq: Vec<Vec<f32>> = Vec::with_capacity(directions_deg.len());
        let mut total = 0.0_f32;
        for &wd in &directions_deg {
            let dir_weight = direction_weight(wd, config.prevailing_direction_deg);
            let mut row = Vec::with_capacity(speeds_ms.len());
            for &ws in &speeds_ms {
                let w = dir_weight * weibull_density(ws, config.weibull_scale_ms, config.weibull_shape);
                row.push(w);
                total += w;
            }
            freq.push(row);
        }
        if total > 0.0 {
            for row in &mut freq {
                for w in row.iter_mut() {
                    *w /= total;
                }
            }
        }

        Self {
            directions_deg,
            speeds_ms,
            freq,
        }
    }

    /// Wind direction axis values (degrees).
    pub fn directions_deg(&self) -> &[f32] {
        &self.directions_deg
    }

    /// Wind speed axis values (m/s).
    pub fn speeds_ms(&self) -> &[f32] {
        &self.speeds_ms
    }

    /// Occurrence frequency of bin `(di, si)`.
    pub fn frequency(&self, di: usize, si: usize) -> f32 {
        self.freq[di][si]
    }
}

/// Direction bin centers covering `[0, 360)`.
fn direction_axis(step_deg: f32) -> Vec<f32> {
    let mut axis = Vec::new();
    let mut wd = 0.0_f32;
    while wd < 360.0 - 1e-3 {
        axis.push(wd);
        wd += step_deg;
    }
    axis
}

/// Speed bin centers from `min` to `max` inclusive.
fn speed_axis(min_ms: f32, max_ms: f32, step_ms: f32) -> Vec<f32> {
    let mut axis = Vec::new();
    let mut ws = min_ms;
    while ws <= max_ms + 1e-3 {
        axis.push(ws);
        ws += step_ms;
    }
    axis
}

/// Cosine-lobe direction weighting, always positive.
fn direction_weight(wd_deg: f32, prevailing_deg: f32) -> f32 {
    let delta = (wd_deg - prevailing_deg).to_radians();
    1.0 + 0.5 * delta.cos()
}

/// Weibull probability density at `v`.
fn weibull_density(v: f32, scale: f32, shape: f32) -> f32 {
    if v <= 0.0 {
        return 0.0;
    }
    let x = v / scale;
    (shape / scale) * x.powf(shape - 1.0) * (-x.powf(shape)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn axes_cover_the_configured_ranges() {
        let site = Site::from_config(&SiteConfig::default());
        // 0..360 step 30 → 12 directions; 3..=25 step 2 → 12 speeds.
        assert_eq!(site.directions_deg().len(), 12);
        assert_eq!(site.speeds_ms().len(), 12);
        assert_eq!(site.directions_deg().first(), Some(&0.0));
        assert_eq!(site.directions_deg().last(), Some(&330.0));
        assert_eq!(site.speeds_ms().first(), Some(&3.0));
        assert_eq!(site.speeds_ms().last(), Some(&25.0));
    }

    #[test]
    fn frequencies_sum_to_one() {
        let site = Site::from_config(&SiteConfig::default());
        let mut total = 0.0_f32;
        for di in 0..site.directions_deg().len() {
            for si in 0..site.speeds_ms().len() {
                total += site.frequency(di, si);
            }
        }
        assert!((total - 1.0).abs() < 1e-4, "total {total}");
    }

    #[test]
    fn prevailing_direction_is_most_frequent() {
        let config = SiteConfig::default();
        let site = Site::from_config(&config);
        let di_prevailing = site
            .directions_deg()
            .iter()
            .position(|&d| d == config.prevailing_direction_deg)
            .expect("prevailing direction on axis");
        let di_opposite = site
            .directions_deg()
            .iter()
            .position(|&d| d == (config.prevailing_direction_deg + 180.0) % 360.0)
            .expect("opposite direction on axis");
        // Compare at the same speed bin.
        assert!(site.frequency(di_prevailing, 4) > site.frequency(di_opposite, 4));
    }

    #[test]
    fn weibull_density_peaks_below_scale_for_shape_two() {
        let d = |v: f32| weibull_density(v, 10.0, 2.0);
        assert!(d(7.0) > d(2.0));
        assert!(d(7.0) > d(20.0));
        assert_eq!(weibull_density(0.0, 10.0, 2.0), 0.0);
    }

    #[test]
    fn finer_steps_produce_more_bins() {
        let config = SiteConfig {
            direction_step_deg: 15.0,
            speed_step_ms: 1.0,
            ..SiteConfig::default()
        };
        let site = Site::from_config(&config);
        assert_eq!(site.directions_deg().len(), 24);
        assert_eq!(site.speeds_ms().len(), 23);
    }
}
