// SPDX-License-Identifier: MPL-2.0
//! Decorative timer effects: cadences and generation logic.
//!
//! Nothing here is load-bearing; update logic never branches on these
//! values. Generation takes the RNG by parameter so tests can seed it.

use rand::Rng;
use std::time::Duration;

/// Period between glitch pulses on the title.
pub const GLITCH_PERIOD: Duration = Duration::from_secs(5);

/// How long a glitch pulse stays visible.
pub const GLITCH_PULSE: Duration = Duration::from_millis(150);

/// Period between binary-noise regenerations.
pub const NOISE_PERIOD: Duration = Duration::from_millis(300);

/// Length of the binary-noise backdrop string.
pub const NOISE_LENGTH: usize = 800;

/// Generates a random string of `length` binary digits.
pub fn binary_noise(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect()
}
