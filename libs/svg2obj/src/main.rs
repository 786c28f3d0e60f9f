//! `svg2obj` command-line front end.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use cli::{Command, USAGE};
use std::fs::File;
use std::io::BufWriter;

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("svg2obj error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Convert(cli)) => cli,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => bail!("{err:#}\n\n{USAGE}"),
    };

    let conversion = svg2obj::convert_file(&cli.input, &cli.options)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);
    conversion
        .write_obj(&mut out, &cli.input.display().to_string())
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if let Some(path) = &cli.report {
        let json = conversion.report.to_json()?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    let report = &conversion.report;
    println!("Converted SVG to OBJ: {}", cli.output.display());
    println!("   Vertices: {}", conversion.mesh.vertex_count());
    println!("   Faces: {}", conversion.mesh.triangle_count());
    println!("   Paths processed: {}", report.paths_found);
    if !report.skipped_degenerate.is_empty() {
        println!("   Paths skipped: {}", report.skipped_degenerate.len());
    }

    if cli.strict && !report.is_clean() {
        for err in &report.failed {
            eprintln!("  {err}");
        }
        bail!("{} path(s) failed to convert", report.failed.len());
    }
    Ok(())
}
