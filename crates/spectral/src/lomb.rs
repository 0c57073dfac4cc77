//! Lomb-Scargle periodogram for irregularly sampled series.
//!
//! Scargle (1982) normalisation: at each test frequency the phase shift tau
//! makes the sine and cosine terms orthogonal, and the power is normalised by
//! the sample variance so a pure noise series has unit expected power.

use tracing::debug;

use crate::error::SpectralError;
use crate::frequency_grid;
use crate::table::SpectrumTable;

use std::f64::consts::PI;

/// Minimum finite observations for a meaningful periodogram.
const MIN_POINTS: usize = 3;

/// Lomb-Scargle periodogram of `values` observed at `times`.
///
/// Missing (non-finite) values are omitted from the sums along with their
/// times. The frequency grid matches the regular method: `k / (n * delta)`
/// for `k = 2..=n/2`, with `n` the full series length, so both estimators
/// report the same band `[2/(n*delta), 1/(2*delta)]`.
///
/// # Errors
///
/// Returns [`SpectralError::LengthMismatch`] for misaligned inputs,
/// [`SpectralError::InvalidDelta`] for a bad delta,
/// [`SpectralError::TooFewPoints`] when fewer than 3 finite observations
/// remain, and [`SpectralError::TooFewFrequencies`] for a band with fewer
/// than 2 rows.
pub fn lomb_scargle(
    times: &[f64],
    values: &[f64],
    delta: f64,
) -> Result<SpectrumTable, SpectralError> {
    if times.len() != values.len() {
        return Err(SpectralError::LengthMismatch {
            times_len: times.len(),
            values_len: values.len(),
        });
    }
    if !delta.is_finite() || delta <= 0.0 {
        return Err(SpectralError::InvalidDelta { delta });
    }

    let pairs: Vec<(f64, f64)> = times
        .iter()
        .zip(values.iter())
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .map(|(&t, &v)| (t, v))
        .collect();

    if pairs.len() < MIN_POINTS {
        return Err(SpectralError::TooFewPoints {
            n_finite: pairs.len(),
            needed: MIN_POINTS,
        });
    }

    let freqs = frequency_grid(times.len(), delta);
    if freqs.len() < 2 {
        return Err(SpectralError::TooFewFrequencies { n_rows: freqs.len() });
    }

    let nf = pairs.len() as f64;
    let mean: f64 = pairs.iter().map(|(_, v)| v).sum::<f64>() / nf;
    let var: f64 = pairs
        .iter()
        .map(|(_, v)| (v - mean) * (v - mean))
        .sum::<f64>()
        / (nf - 1.0);

    let powers: Vec<f64> = freqs
        .iter()
        .map(|&f| single_frequency_power(&pairs, mean, var, 2.0 * PI * f))
        .collect();

    debug!(
        n_finite = pairs.len(),
        n_rows = powers.len(),
        "computed Lomb-Scargle periodogram"
    );
    Ok(SpectrumTable::new(freqs, powers))
}

/// Normalised Lomb-Scargle power at angular frequency `omega`.
fn single_frequency_power(pairs: &[(f64, f64)], mean: f64, var: f64, omega: f64) -> f64 {
    if var <= 0.0 || omega <= 0.0 {
        return 0.0;
    }

    // Phase shift tau makes the sine and cosine bases orthogonal.
    let mut sum_sin2w = 0.0;
    let mut sum_cos2w = 0.0;
    for &(t, _) in pairs {
        let arg = 2.0 * omega * t;
        sum_sin2w += arg.sin();
        sum_cos2w += arg.cos();
    }
    let tau = sum_sin2w.atan2(sum_cos2w) / (2.0 * omega);

    let mut sc = 0.0;
    let mut ss = 0.0;
    let mut cc = 0.0;
    let mut s2 = 0.0;
    for &(t, v) in pairs {
        let centred = v - mean;
        let arg = omega * (t - tau);
        let c = arg.cos();
        let s = arg.sin();
        sc += centred * c;
        ss += centred * s;
        cc += c * c;
        s2 += s * s;
    }

    let cc = cc.max(1e-15);
    let s2 = s2.max(1e-15);

    0.5 * (sc * sc / cc + ss * ss / s2) / var
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recovers_sinusoid_frequency_on_irregular_grid() {
        // Deterministic jittered sampling of a 20-day period sinusoid.
        let times: Vec<f64> = (0..120)
            .map(|i| i as f64 + 0.3 * ((i * 7 % 10) as f64 / 10.0))
            .collect();
        let values: Vec<f64> = times
            .iter()
            .map(|&t| (2.0 * PI * t / 20.0).sin())
            .collect();

        let table = lomb_scargle(&times, &values, 1.0).unwrap();
        let (peak_freq, peak_power) = table
            .rows()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();

        assert_relative_eq!(peak_freq, 0.05, epsilon = 0.01);
        assert!(peak_power > 10.0, "peak power too weak: {peak_power}");
    }

    #[test]
    fn missing_values_are_skipped() {
        let times: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let mut values: Vec<f64> = times
            .iter()
            .map(|&t| (2.0 * PI * t / 12.0).sin())
            .collect();
        values[5] = f64::NAN;
        values[30] = f64::NAN;

        let table = lomb_scargle(&times, &values, 1.0).unwrap();
        let (peak_freq, _) = table
            .rows()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();
        assert_relative_eq!(peak_freq, 1.0 / 12.0, epsilon = 0.02);
    }

    #[test]
    fn constant_series_has_zero_power() {
        let times: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let values = vec![2.0; 40];
        let table = lomb_scargle(&times, &values, 1.0).unwrap();
        for (_, power) in table.rows() {
            assert_relative_eq!(power, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn length_mismatch_rejected() {
        assert!(matches!(
            lomb_scargle(&[0.0, 1.0], &[1.0], 1.0),
            Err(SpectralError::LengthMismatch {
                times_len: 2,
                values_len: 1
            })
        ));
    }

    #[test]
    fn too_few_finite_points_rejected() {
        let times = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let values = [1.0, 2.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN];
        assert!(matches!(
            lomb_scargle(&times, &values, 1.0),
            Err(SpectralError::TooFewPoints {
                n_finite: 2,
                needed: 3
            })
        ));
    }

    #[test]
    fn invalid_delta_rejected() {
        let times = [0.0, 1.0, 2.0];
        let values = [1.0, 2.0, 3.0];
        assert!(matches!(
            lomb_scargle(&times, &values, -1.0),
            Err(SpectralError::InvalidDelta { .. })
        ));
    }
}
