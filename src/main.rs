use std::env;

use anyhow::{Context, Result, bail};
use log::info;

use shallow_ann::run::RunConfig;

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: shallow_ann <run.json>");
    };

    let run = RunConfig::from_json(&path).with_context(|| format!("cannot load '{path}'"))?;
    info!(
        "selecting the best of {} {:?} networks",
        run.candidates, run.activation
    );

    let accuracy = run.execute()?;
    println!("accuracy: {accuracy}");

    if let Some(output) = &run.output {
        println!("saved to {}", output.display());
    }

    Ok(())
}
