//! Twiddle and chirp table construction.
//!
//! Both tables are filled once at kernel construction and read on every
//! transform, so the fill routines favor the cheap recurrence/symmetry
//! forms over per-entry trigonometric calls.

use crate::num::{Complex, Float};

/// Nearest `f64` to `sqrt(2)/2`, pinned so the quarter-turn entries of
/// every table agree bit-for-bit across table lengths.
const HALF_SQRT2: f64 = 0.7071067811865476;

/// Fill `table` (length `H`, a power of two or zero) with
/// `table[k] = exp(-i·π·k/H)`.
///
/// Only the first octant is produced by the angle recurrence; the other
/// entries come from quadrant symmetry. The `H/4` and `3H/4` slots are
/// written from [`HALF_SQRT2`] rather than the recurrence.
pub fn fill_twiddles<T: Float>(table: &mut [Complex<T>]) {
    let half = table.len();
    if half == 0 {
        return;
    }
    table[0] = Complex::new(T::one(), T::zero());
    if half == 1 {
        return;
    }
    table[half / 2] = Complex::new(T::zero(), -T::one());
    if half / 2 == 1 {
        return;
    }

    let step = T::pi() / T::from_usize(half);
    let step_cos = step.cos();
    let step_sin = step.sin();
    // Rotate by -π/H per iteration; the new cosine must be staged in a
    // temporary because the sine update reads the pre-rotation cosine.
    let mut cos_t = T::one();
    let mut sin_t = T::zero();
    for k in 1..half / 4 {
        let next_cos = cos_t * step_cos + sin_t * step_sin;
        sin_t = sin_t * step_cos - cos_t * step_sin;
        cos_t = next_cos;
        table[k] = Complex::new(cos_t, sin_t);
        table[half / 2 - k] = Complex::new(-sin_t, -cos_t);
        table[half / 2 + k] = Complex::new(sin_t, -cos_t);
        table[half - k] = Complex::new(-cos_t, sin_t);
    }

    if half >= 4 {
        let d = T::from_f64(HALF_SQRT2);
        table[half / 4] = Complex::new(d, -d);
        table[3 * half / 4] = Complex::new(-d, -d);
    }
}

/// Fill `table` (length `M`) with the circulant layout of the chirp
/// `exp(i·π·n²/N)` for logical size `N`.
///
/// Entry 0 is 1, entries `1..N` hold the chirp mirrored into the right
/// tail (`table[M-i] = table[i]`), and the interior stays zero.
pub fn fill_chirp<T: Float>(table: &mut [Complex<T>], logical: usize) {
    let m = table.len();
    for slot in table.iter_mut() {
        *slot = Complex::zero();
    }
    if m == 0 {
        return;
    }
    table[0] = Complex::new(T::one(), T::zero());
    for i in 1..logical {
        let angle = T::pi() * T::from_usize(i * i) / T::from_usize(logical);
        let w = Complex::expi(angle);
        table[i] = w;
        table[m - i] = w;
    }
}
