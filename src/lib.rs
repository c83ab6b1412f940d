//! This is the documentation for the **gausslens** package.
//!
//! **gausslens** calculates how a Gaussian laser beam is transformed by an ideal thin lens and
//! draws a schematic of the beam in front of and behind the lens.
//!
//! The input beam is described by its wavelength, its waist radius and the distance of the waist
//! in front of the lens. From these and the focal length of the lens, [`calculator::calculate`]
//! derives the waist position and radius of the output beam, both Rayleigh ranges and both
//! far-field divergence angles. [`render::render`] turns the result into a list of drawing
//! commands which are drawn onto an SVG file, a bitmap file or an image buffer.
//!
//! ```
//! use gausslens::{calculator::try_calculate, display_fields::DisplayFields};
//!
//! let (_, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
//! let fields = DisplayFields::from(&result);
//! assert_eq!(fields.output_waist_position, "100.32 mm");
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod console;
pub mod display_fields;
pub mod error;
pub mod gaussian_beam;
pub mod render;
pub mod session;
pub mod setup;
pub mod utils;

use chrono::DateTime;
/// Return the version information of the currently built gausslens executable.
///
/// This function returns a `String` which contains the current Git tag/hash combination as well
/// as the timestamp of this commit.
#[must_use]
pub fn get_version() -> String {
    let timestamp = DateTime::parse_from_rfc3339(env!("VERGEN_GIT_COMMIT_TIMESTAMP")).map_or_else(
        |_| String::from("invalid timestamp"),
        |timestamp| timestamp.format("%Y/%m/%d %H:%M").to_string(),
    );
    format!("{} ({})", env!("VERGEN_GIT_DESCRIBE"), timestamp)
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version_string = get_version();
        assert!(version_string.starts_with(env!("VERGEN_GIT_DESCRIBE")));
        assert!(version_string.ends_with(')'));
    }
}
