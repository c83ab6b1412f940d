//! Handling the gausslens CLI
//!
//! This module handles the command line parsing, prompting for missing beam parameters and the
//! interactive mode, where single parameters are changed and the diagram is redrawn.
use crate::{
    error::{GaussLensError, GlResult},
    get_version,
    render::{paint, RenderConfig, SurfaceBackEnd},
    session::{InputField, Session},
    setup::{BeamSetup, Canvas},
};
use clap::{builder::Str, Parser};
use log::warn;
use rprompt::prompt_reply_from_bufread;
use std::{
    io::{stdin, stdout, BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};
use strum::IntoEnumIterator;

/// File name of the diagram if no output is given.
pub const DEFAULT_OUTPUT: &str = "gaussian_beam.svg";
/// Number of prompts for a single parameter before giving up.
const MAX_ATTEMPTS: usize = 3;

/// Resolved arguments of the gausslens application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// beam parameters in display units. All parameters and the canvas are set.
    pub setup: BeamSetup,
    /// destination of the diagram
    pub output: SurfaceBackEnd,
    /// size and colors of the diagram
    pub render_config: RenderConfig,
    /// flag to define whether the interactive mode is started after the first diagram
    pub interactive: bool,
}

/// Command line arguments as given by the user. Missing beam parameters are prompted for.
#[derive(Parser, Debug, Default)]
#[command(author, version = Str::from(&get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// wavelength in nm
    #[arg(short, long)]
    wavelength: Option<f64>,

    /// focal length of the lens in mm
    #[arg(short, long)]
    focal_length: Option<f64>,

    /// distance of the input waist in front of the lens in mm
    #[arg(short = 's', long, allow_negative_numbers = true)]
    object_distance: Option<f64>,

    /// input waist radius in mm
    #[arg(short = 'r', long)]
    waist: Option<f64>,

    /// YAML file with beam parameters and canvas size. Command line values take precedence.
    #[arg(long)]
    setup: Option<String>,

    /// file the diagram is written to (.svg, .png, .bmp or .jpg)
    #[arg(short, long)]
    output: Option<String>,

    /// canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// change parameters interactively after drawing the first diagram
    #[arg(short, long)]
    interactive: bool,
}
impl PartialArgs {
    /// The beam parameters given on the command line.
    const fn cli_setup(&self) -> BeamSetup {
        BeamSetup {
            wavelength: self.wavelength,
            focal_length: self.focal_length,
            object_distance: self.object_distance,
            waist: self.waist,
            canvas: None,
        }
    }
}

/// Parse a number typed by the user.
fn eval_value_input(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// Checks if `value` is allowed for `field`. The object distance may be zero or negative
/// (waist at or behind the lens), all other parameters must be positive.
fn value_is_valid(field: InputField, value: f64) -> bool {
    match field {
        InputField::ObjectDistance => value.is_finite(),
        _ => value.is_finite() && value > 0.0,
    }
}

/// Creates the prompt string for the given field. `init_str` is prepended, e.g. to report an
/// invalid previous input.
fn create_prompt_str(field: InputField, init_str: &str) -> String {
    format!("{init_str}Please insert the {field}:\n")
}

fn console_error(e: std::io::Error) -> GaussLensError {
    GaussLensError::Console(format!("console i/o failed: {e}"))
}

/// Determine the value of a beam parameter.
///
/// A valid `preset` (from the command line or a setup file) is taken as is. Otherwise the user
/// is asked via `writer` and the reply is read from `reader`.
///
/// # Errors
///
/// This function returns an error if no valid value was given within [`MAX_ATTEMPTS`] prompts
/// or the console cannot be read.
fn get_value(
    field: InputField,
    preset: Option<f64>,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> GlResult<f64> {
    if let Some(value) = preset.filter(|v| value_is_valid(field, *v)) {
        return Ok(value);
    }
    let mut init_str = if preset.is_some() {
        "Invalid input!\n"
    } else {
        ""
    };
    for _ in 0..MAX_ATTEMPTS {
        let reply = prompt_reply_from_bufread(reader, writer, create_prompt_str(field, init_str))
            .map_err(console_error)?;
        if let Some(value) = eval_value_input(&reply).filter(|v| value_is_valid(field, *v)) {
            return Ok(value);
        }
        init_str = "Invalid input!\n";
    }
    Err(GaussLensError::Console(format!(
        "Too many wrong inputs for the {field}! Please type \"gausslens -h\" for help!"
    )))
}

/// Select the diagram backend for the given file name. Unsupported file types are written as
/// `.svg` instead.
fn output_backend(output: &str) -> SurfaceBackEnd {
    let path = Path::new(output);
    SurfaceBackEnd::from_path(path).unwrap_or_else(|_| {
        warn!(
            "unsupported diagram file type {}, writing svg instead",
            path.display()
        );
        SurfaceBackEnd::SVG(path.with_extension("svg"))
    })
}

impl Args {
    /// Resolve the given [`PartialArgs`]. Missing or invalid parameters are prompted for using
    /// `reader` and `writer`.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///   - the setup file cannot be read.
    ///   - a parameter could not be determined (see [`get_value`]).
    ///   - the canvas has a width or height of zero.
    pub fn from_partial_args(
        part_args: PartialArgs,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> GlResult<Self> {
        let file_setup = match &part_args.setup {
            Some(path) => BeamSetup::from_file(Path::new(path))?,
            None => BeamSetup::default(),
        };
        let file_canvas = file_setup.canvas;
        let preset = file_setup.overridden_by(part_args.cli_setup());
        let mut setup = BeamSetup::default();
        for field in InputField::iter() {
            let value = get_value(field, preset.value(field), reader, writer)?;
            setup.set_value(field, value);
        }
        let (default_width, default_height) = RenderConfig::default().size();
        let width = part_args
            .width
            .or_else(|| file_canvas.map(|c| c.width))
            .unwrap_or(default_width);
        let height = part_args
            .height
            .or_else(|| file_canvas.map(|c| c.height))
            .unwrap_or(default_height);
        let render_config = RenderConfig::new(width, height)?;
        setup.canvas = Some(Canvas { width, height });
        Ok(Self {
            setup,
            output: output_backend(part_args.output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
            render_config,
            interactive: part_args.interactive,
        })
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = GaussLensError;

    fn try_from(part_args: PartialArgs) -> GlResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        show_intro();
        Self::from_partial_args(part_args, &mut reader, &mut writer)
    }
}

/// Creates the title line including the version information.
#[must_use]
fn create_intro() -> String {
    format!(
        "gausslens - Gaussian beam through a thin lens\nversion {}\n",
        get_version()
    )
}

/// Print title and version information to the console.
pub fn show_intro() {
    println!("{}", create_intro());
}

/// A command of the interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// set a beam parameter to the given (unparsed) value
    Set(InputField, String),
    /// leave the interactive mode
    Quit,
}

/// Parse a line of the interactive mode.
///
/// Accepted are `<parameter> <value>` (e.g. `waist 0.5` or `focal-length 200`) and `q` / `quit`.
/// An empty line quits as well. Returns `None` for anything else.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() || line == "q" || line == "quit" {
        return Some(Command::Quit);
    }
    let (key, value) = line.split_once(char::is_whitespace)?;
    InputField::from_key(&key.replace('-', "_"))
        .map(|field| Command::Set(field, value.trim().into()))
}

fn write_help(writer: &mut impl Write) -> GlResult<()> {
    writeln!(writer, "Change a parameter with <parameter> <value>. Parameters:")
        .map_err(console_error)?;
    for field in InputField::iter() {
        writeln!(writer, "  {:<16}{field}", field.key()).map_err(console_error)?;
    }
    writeln!(writer, "Quit with q or an empty line.").map_err(console_error)
}

/// Run the interactive mode.
///
/// Every successful parameter change prints the new output values to `writer` and redraws the
/// diagram on `output`. Invalid values keep the previous diagram.
///
/// # Errors
///
/// This function returns an error if the console cannot be read or written, or if the diagram
/// cannot be written.
pub fn run_interactive(
    session: &mut Session,
    output: &SurfaceBackEnd,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> GlResult<()> {
    write_help(writer)?;
    loop {
        let line = match prompt_reply_from_bufread(reader, writer, "> ") {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(console_error(e)),
        };
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Set(field, value)) => {
                if session.set_field(field, &value) {
                    if let Some(frame) = session.frame() {
                        writeln!(writer, "{}", frame.fields).map_err(console_error)?;
                        paint(&frame.scene, output)?;
                    }
                } else {
                    writeln!(writer, "invalid {field}, keeping the previous diagram")
                        .map_err(console_error)?;
                }
            }
            None => writeln!(writer, "unknown command: {}", line.trim()).map_err(console_error)?,
        }
    }
    Ok(())
}
