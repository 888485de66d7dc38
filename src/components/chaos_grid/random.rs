//! Seeded pseudo-random rolls.
//!
//! Layout must come out identical on every render, so randomness is a pure
//! function of an integer seed. Rolls are quantised to two decimals, which
//! hides any last-ulp differences in `sin` between platforms.

/// Scale applied to `sin(seed)` before taking the fractional part.
const SPREAD: f64 = 10_000.0;

/// Largest value a roll can take after rounding.
const MAX_ROLL: f64 = 0.99;

/// Deterministic roll in `[0, 0.99]`, always a multiple of `0.01`.
pub fn seeded_random(seed: u64) -> f64 {
	let x = (seed as f64).sin() * SPREAD;
	let roll = ((x - x.floor()) * 100.0).round() / 100.0;
	roll.min(MAX_ROLL)
}

/// Map a roll onto `[-range, range]`.
pub(crate) fn symmetric(roll: f64, range: f64) -> f64 {
	(roll * 2.0 - 1.0) * range
}
