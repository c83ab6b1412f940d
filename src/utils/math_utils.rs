//! Lossy numeric conversions between pixel and float domains.
/// Round a pixel coordinate to the nearest integer pixel. Saturates at the `i32` range.
#[must_use]
pub fn f64_to_i32(value: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let newval = value.round() as i32;
    newval
}
