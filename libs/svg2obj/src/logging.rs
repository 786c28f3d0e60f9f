//! Logger setup for the command-line front end.
//!
//! Logs from the workspace crates are shown at `info` in debug builds and
//! `warn` in release builds. `RUST_LOG` overrides the default:
//!
//! ```sh
//! $> RUST_LOG=svg2obj=debug,svg_path_parser=trace svg2obj logo.svg
//! ```

use log::LevelFilter;

const CRATES: [&str; 4] = ["svg2obj", "svg_document", "svg_path_parser", "extrude_mesh"];

pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let filter = default_filter(&CRATES, level);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn default_filter(crates: &[&str], level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    crates
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter(&["a", "b_c"], LevelFilter::Warn),
            "a=warn,b_c=warn"
        );
    }
}
