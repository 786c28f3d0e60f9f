//! Command-line argument parsing.

use anyhow::{anyhow, bail, Context, Result};
use config::constants::{
    ExtrusionConfig, DEFAULT_CURVE_SEGMENTS, DEFAULT_EXTRUSION_DEPTH, DEFAULT_TARGET_WIDTH,
};
use extrude_mesh::Triangulation;
use std::path::PathBuf;
use svg2obj::{ConvertOptions, SubpathMode};

pub const USAGE: &str = r#"svg2obj

Extrude the path outlines of an SVG document into a Wavefront OBJ mesh.

USAGE:
  svg2obj <input.svg> [options]

OPTIONS:
  -o, --output <path>          Output file (default: input with .obj extension)
  --width <W>                  Target width of the model (default: 100)
  --depth <D>                  Extrusion depth (default: 10)
  --curve-segments <N>         Chords per cubic curve (default: 5)
  --triangulation <fan|ear-clip>
                               Cap triangulation (default: fan)
  --split-subpaths             Extrude each sub-path as its own solid
  --report <path>              Write the conversion report as JSON
  --strict                     Exit with an error if any path failed
  -h, --help                   Show this help
"#;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub options: ConvertOptions,
    pub strict: bool,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert(Cli),
    Help,
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args = args.into_iter();

    let mut input = None;
    let mut output = None;
    let mut report = None;
    let mut width = DEFAULT_TARGET_WIDTH;
    let mut depth = DEFAULT_EXTRUSION_DEPTH;
    let mut segments = DEFAULT_CURVE_SEGMENTS;
    let mut triangulation = Triangulation::Fan;
    let mut subpaths = SubpathMode::Concatenate;
    let mut strict = false;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| anyhow!("missing value for {flag}"));
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--output" => output = Some(PathBuf::from(value(&arg)?)),
            "--report" => report = Some(PathBuf::from(value(&arg)?)),
            "--width" => width = number(&arg, &value(&arg)?)?,
            "--depth" => depth = number(&arg, &value(&arg)?)?,
            "--curve-segments" => segments = number(&arg, &value(&arg)?)?,
            "--triangulation" => {
                triangulation = match value(&arg)?.as_str() {
                    "fan" => Triangulation::Fan,
                    "ear-clip" | "earclip" => Triangulation::EarClip,
                    other => bail!("unknown triangulation `{other}`, expected fan or ear-clip"),
                }
            }
            "--split-subpaths" => subpaths = SubpathMode::Split,
            "--strict" => strict = true,
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown option `{flag}`"),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument `{arg}`"),
        }
    }

    let input: PathBuf = input.ok_or_else(|| anyhow!("missing input file"))?;
    let output = output.unwrap_or_else(|| input.with_extension("obj"));
    let extrusion = ExtrusionConfig::new(width, depth, segments)?;

    Ok(Command::Convert(Cli {
        input,
        output,
        report,
        options: ConvertOptions::new(extrusion)
            .with_triangulation(triangulation)
            .with_subpaths(subpaths),
        strict,
    }))
}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value `{value}` for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn convert(line: &str) -> Cli {
        match parse_args(args(line)).unwrap() {
            Command::Convert(cli) => cli,
            Command::Help => panic!("expected a conversion"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = convert("art/logo.svg");
        assert_eq!(cli.output, PathBuf::from("art/logo.obj"));
        assert_eq!(cli.options, ConvertOptions::default());
        assert!(!cli.strict);
        assert_eq!(cli.report, None);
    }

    #[test]
    fn test_all_options() {
        let cli = convert(
            "in.svg -o out.obj --width 50 --depth 2.5 --curve-segments 9 \
             --triangulation ear-clip --split-subpaths --strict --report r.json",
        );
        assert_eq!(cli.output, PathBuf::from("out.obj"));
        assert_eq!(cli.report, Some(PathBuf::from("r.json")));
        assert_eq!(cli.options.extrusion, ExtrusionConfig::new(50.0, 2.5, 9).unwrap());
        assert_eq!(cli.options.triangulation, Triangulation::EarClip);
        assert_eq!(cli.options.subpaths, SubpathMode::Split);
        assert!(cli.strict);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(args("in.svg --help")).unwrap(), Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args("")).is_err());
        assert!(parse_args(args("in.svg --width")).is_err());
        assert!(parse_args(args("in.svg --width abc")).is_err());
        assert!(parse_args(args("in.svg --depth 0")).is_err());
        assert!(parse_args(args("in.svg --triangulation delaunay")).is_err());
        assert!(parse_args(args("in.svg --bogus")).is_err());
        assert!(parse_args(args("a.svg b.svg")).is_err());
    }
}
