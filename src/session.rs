#![warn(missing_docs)]
//! The update cycle binding input fields to the calculator and the renderer.
//!
//! A [`Session`] holds the four input fields as entered by the user together with the last
//! valid [`Frame`]. Every field change triggers one complete calculate-then-render cycle. If the
//! inputs are invalid the cycle is silently skipped and the previous frame stays untouched.
use crate::{
    calculator::{try_calculate, BeamInput, BeamResult},
    display_fields::DisplayFields,
    render::{render, RenderConfig, Scene},
    setup::BeamSetup,
};
use log::debug;
use std::fmt::Display;
use strum::{EnumIter, IntoEnumIterator};

/// The input fields of the beam transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum InputField {
    /// wavelength in nm
    Wavelength,
    /// focal length of the lens in mm
    FocalLength,
    /// distance of the input waist in front of the lens in mm
    ObjectDistance,
    /// input waist radius in mm
    WaistRadius,
}
impl InputField {
    /// Returns the short name used on the command line and in setup files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wavelength => "wavelength",
            Self::FocalLength => "focal_length",
            Self::ObjectDistance => "object_distance",
            Self::WaistRadius => "waist",
        }
    }
    /// Returns the display unit of this field.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Wavelength => "nm",
            _ => "mm",
        }
    }
    /// Find the field for the given key (see [`InputField::key`]).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|f| f.key() == key)
    }
}
impl Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wavelength => "wavelength",
            Self::FocalLength => "focal length",
            Self::ObjectDistance => "object distance",
            Self::WaistRadius => "input waist radius",
        };
        write!(f, "{name} ({})", self.unit())
    }
}

/// Parse a field value. Everything that is not a number is treated as NaN.
fn parse_value(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// The outcome of one successful update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// the validated input
    pub input: BeamInput,
    /// the calculated beam behind the lens
    pub result: BeamResult,
    /// the formatted numeric output
    pub fields: DisplayFields,
    /// the schematic drawing
    pub scene: Scene,
}

/// Current input values and the last valid output.
#[derive(Debug, Clone)]
pub struct Session {
    values: [String; 4],
    config: RenderConfig,
    frame: Option<Frame>,
}
impl Session {
    /// Creates a new [`Session`] with empty input fields. Nothing is drawn until all fields
    /// contain valid values.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            values: Default::default(),
            config,
            frame: None,
        }
    }
    /// Creates a new [`Session`] with the parameters of `setup` and runs the first update cycle.
    #[must_use]
    pub fn from_setup(setup: &BeamSetup, config: RenderConfig) -> Self {
        let mut session = Self::new(config);
        for field in InputField::iter() {
            if let Some(value) = setup.value(field) {
                session.values[Self::index(field)] = value.to_string();
            }
        }
        session.update();
        session
    }
    const fn index(field: InputField) -> usize {
        match field {
            InputField::Wavelength => 0,
            InputField::FocalLength => 1,
            InputField::ObjectDistance => 2,
            InputField::WaistRadius => 3,
        }
    }
    /// Returns the current (unparsed) value of `field`.
    #[must_use]
    pub fn value(&self, field: InputField) -> &str {
        &self.values[Self::index(field)]
    }
    /// Returns the render configuration of this [`Session`].
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }
    /// Returns the last valid frame, if any.
    #[must_use]
    pub const fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
    /// Change a single field and run an update cycle.
    ///
    /// Returns `true` if a new frame was produced, `false` if the inputs are invalid and the
    /// previous frame was kept.
    pub fn set_field(&mut self, field: InputField, text: &str) -> bool {
        text.trim().clone_into(&mut self.values[Self::index(field)]);
        self.update()
    }
    /// Run one update cycle from the current field values.
    ///
    /// Returns `true` if a new frame was produced.
    pub fn update(&mut self) -> bool {
        let [wavelength, focal_length, object_distance, waist] =
            self.values.each_ref().map(|v| parse_value(v));
        let Some((input, result)) =
            try_calculate(wavelength, focal_length, object_distance, waist)
        else {
            debug!("inputs incomplete or invalid, keeping previous frame");
            return false;
        };
        let scene = render(&input, &result, &self.config);
        self.frame = Some(Frame {
            input,
            result,
            fields: DisplayFields::from(&result),
            scene,
        });
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;

    fn filled_session() -> Session {
        let mut session = Session::new(RenderConfig::default());
        session.set_field(InputField::Wavelength, "632.8");
        session.set_field(InputField::FocalLength, "100");
        session.set_field(InputField::ObjectDistance, "150");
        assert!(session.set_field(InputField::WaistRadius, "0.5"));
        session
    }
    #[test]
    fn field_keys() {
        for field in InputField::iter() {
            assert_eq!(InputField::from_key(field.key()), Some(field));
        }
        assert_eq!(InputField::from_key("waist"), Some(InputField::WaistRadius));
        assert_eq!(InputField::from_key("power"), None);
    }
    #[test]
    fn field_display() {
        assert_eq!(format!("{}", InputField::Wavelength), "wavelength (nm)");
        assert_eq!(format!("{}", InputField::ObjectDistance), "object distance (mm)");
    }
    #[test]
    fn parse() {
        assert_eq!(parse_value(" 1.5 "), 1.5);
        assert_eq!(parse_value("1e3"), 1000.0);
        assert!(parse_value("").is_nan());
        assert!(parse_value("abc").is_nan());
    }
    #[test]
    fn nothing_drawn_until_valid() {
        let mut session = Session::new(RenderConfig::default());
        assert!(!session.set_field(InputField::Wavelength, "632.8"));
        assert!(!session.set_field(InputField::FocalLength, "100"));
        assert!(!session.set_field(InputField::ObjectDistance, "150"));
        assert!(session.frame().is_none());
        assert!(session.set_field(InputField::WaistRadius, "0.5"));
        assert!(session.frame().is_some());
    }
    #[test]
    fn valid_update() {
        let session = filled_session();
        let frame = session.frame().unwrap();
        assert_eq!(frame.fields.output_waist_position, "100.32 mm");
        assert_eq!(frame.fields.input_rayleigh_range, "1241.15 mm");
        assert_eq!(frame.scene.size(), (800, 400));
        assert_eq!(session.value(InputField::FocalLength), "100");
    }
    #[test]
    fn invalid_input_keeps_frame() {
        for (field, text) in [
            (InputField::Wavelength, "0"),
            (InputField::WaistRadius, "0"),
            (InputField::FocalLength, "0"),
            (InputField::FocalLength, "-50"),
            (InputField::Wavelength, "NaN"),
            (InputField::ObjectDistance, "abc"),
            (InputField::WaistRadius, ""),
        ] {
            let mut session = filled_session();
            let before = session.frame().unwrap().clone();
            assert!(!session.set_field(field, text));
            assert_eq!(session.frame().unwrap(), &before);
            assert_eq!(session.value(field), text);
        }
    }
    #[test]
    fn recovers_after_invalid_input() {
        let mut session = filled_session();
        assert!(!session.set_field(InputField::FocalLength, "0"));
        assert!(session.set_field(InputField::FocalLength, "200"));
        let frame = session.frame().unwrap();
        assert_eq!(frame.fields.output_waist_position.is_empty(), false);
        assert_ne!(frame.fields.output_waist_position, "100.32 mm");
    }
    #[test]
    fn update_is_idempotent() {
        let mut session = filled_session();
        let before = session.frame().unwrap().clone();
        assert!(session.update());
        assert_eq!(session.frame().unwrap(), &before);
    }
    #[test]
    fn from_setup() {
        let setup = BeamSetup::from_string(
            "wavelength: 632.8\nfocal_length: 100\nobject_distance: 150\nwaist: 0.5\n",
        )
        .unwrap();
        let session = Session::from_setup(&setup, RenderConfig::new(400, 200).unwrap());
        assert_eq!(session.value(InputField::Wavelength), "632.8");
        assert_eq!(session.value(InputField::FocalLength), "100");
        let frame = session.frame().unwrap();
        assert_eq!(frame.fields, filled_session().frame().unwrap().fields);
        assert_eq!(frame.scene.size(), (400, 200));
    }
    #[test]
    fn from_incomplete_setup() {
        let setup = BeamSetup::from_string("wavelength: 632.8").unwrap();
        let session = Session::from_setup(&setup, RenderConfig::default());
        assert!(session.frame().is_none());
        assert_eq!(session.value(InputField::WaistRadius), "");
    }
    #[test]
    fn skipped_cycle_logged() {
        let mut session = filled_session();
        testing_logger::setup();
        session.set_field(InputField::Wavelength, "0");
        check_logs(
            log::Level::Debug,
            vec![
                "skipping update: InvalidInput:wavelength must be > 0.0 and finite",
                "inputs incomplete or invalid, keeping previous frame",
            ],
        );
    }
}
