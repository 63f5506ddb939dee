use crate::core::data::complex::Complex;

/// Applies `recurrence` to `start` until the value's modulus exceeds
/// `threshold` or `max_iterations` applications have been made, and returns
/// the number of applications performed.
///
/// A start value already beyond the threshold returns 0; a value that never
/// escapes returns `max_iterations`.
#[inline]
pub fn escape_time<R>(start: Complex, threshold: f64, max_iterations: u32, recurrence: R) -> u32
where
    R: Fn(Complex) -> Complex,
{
    let mut z = start;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude() <= threshold {
        z = recurrence(z);
        iterations += 1;
    }

    iterations
}
