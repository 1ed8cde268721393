use crate::constants::*;
use crate::models::Coordinates;
use rand::distr::{Distribution, StandardUniform};
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::TAU;

/// Random parameters of one loop, drawn from the seed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LoopShape {
    /// Rotation of the loop, radians in [0, 2π)
    phase: f64,
    /// Radial wobble amplitude in [LOOP_WOBBLE_MIN, LOOP_WOBBLE_MAX)
    wobble: f64,
}

impl LoopShape {
    fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let phase: f64 = StandardUniform.sample(&mut rng);
        let wobble: f64 = StandardUniform.sample(&mut rng);

        LoopShape {
            phase: phase * TAU,
            wobble: LOOP_WOBBLE_MIN + wobble * (LOOP_WOBBLE_MAX - LOOP_WOBBLE_MIN),
        }
    }

    /// Radial scale at angle `t`; keeps the loop from being a perfect circle.
    fn radial_scale(&self, t: f64) -> f64 {
        1.0 + self.wobble * (LOOP_WOBBLE_LOBES * t + self.phase * LOOP_WOBBLE_PHASE_FACTOR).sin()
    }

    /// East-west stretch at angle `t`; makes the loop slightly elliptical.
    fn lon_stretch(&self, t: f64) -> f64 {
        LOOP_STRETCH_BASE
            + LOOP_STRETCH_AMPLITUDE * (t + self.phase * LOOP_STRETCH_PHASE_FACTOR).sin()
    }
}

/// Build a closed walking-loop polygon around `center` without any network call.
///
/// The loop's perimeter roughly matches `length_km`. The same
/// `(center, length_km, seed)` always yields the same sequence; a missing seed
/// uses [`LOOP_DEFAULT_SEED`]. The result has `LOOP_STEPS + 1` points and the
/// last point repeats the first.
///
/// Zero, negative, or NaN lengths are clamped to [`LOOP_MIN_RADIUS_KM`], and
/// longitude scaling is floored near the poles, so this never fails.
pub fn synthesize_loop(center: Coordinates, length_km: f64, seed: Option<u64>) -> Vec<Coordinates> {
    let radius_km = (length_km / TAU).max(LOOP_MIN_RADIUS_KM);

    let lat_deg_per_km = 1.0 / KM_PER_DEGREE_LAT;
    let cos_lat = center.lat.to_radians().cos().abs().max(LOOP_MIN_COS_LAT);
    let lon_deg_per_km = 1.0 / (KM_PER_DEGREE_LON_EQUATOR * cos_lat);

    let shape = LoopShape::from_seed(seed.unwrap_or(LOOP_DEFAULT_SEED));

    let mut path = Vec::with_capacity(LOOP_STEPS + 1);
    for step in 0..LOOP_STEPS {
        let t = (step as f64 / LOOP_STEPS as f64) * TAU + shape.phase;
        let r = radius_km * shape.radial_scale(t);

        let d_lat_km = r * t.cos();
        let d_lon_km = r * shape.lon_stretch(t) * t.sin();

        path.push(Coordinates::new(
            center.lat + d_lat_km * lat_deg_per_km,
            center.lon + d_lon_km * lon_deg_per_km,
        ));
    }

    // Close the loop on the starting point
    if let Some(&start) = path.first() {
        path.push(start);
    }

    tracing::debug!(
        points = path.len(),
        radius_km = %format!("{:.3}", radius_km),
        wobble = %format!("{:.3}", shape.wobble),
        "Synthesized {:.1}km loop around ({:.4}, {:.4})",
        length_km, center.lat, center.lon
    );

    path
}
