use clap::Parser;
use env_logger::Env;
use gausslens::{
    console::{run_interactive, Args, PartialArgs},
    error::{GaussLensError, GlResult},
    render::paint,
    session::Session,
};
use std::io::{stdin, stdout};

fn main() -> GlResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    //parse CLI arguments, prompt for missing parameters
    let args = Args::try_from(PartialArgs::parse())?;

    //first update cycle
    let mut session = Session::from_setup(&args.setup, args.render_config.clone());
    let frame = session.frame().ok_or_else(|| {
        GaussLensError::InvalidInput("the beam parameters do not give a finite result".into())
    })?;
    println!("{}", frame.fields);
    paint(&frame.scene, &args.output)?;

    if args.interactive {
        run_interactive(
            &mut session,
            &args.output,
            &mut stdin().lock(),
            &mut stdout().lock(),
        )?;
    }
    Ok(())
}
