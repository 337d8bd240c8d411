//! Command-line options.
//!
//! `coinpath [MAZE...] [-d DIR] [-f text|json] [-r] [-j]`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// Maze files solved when none are given on the command line.
pub const DEFAULT_MAZES: [&str; 3] = ["maze_11x11.txt", "maze_31x31.txt", "maze_101x101.txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
pub struct Options {
    pub mazes: Vec<PathBuf>,
    pub format: OutputFormat,
    pub render: bool,
    pub parallel: bool,
}

fn make_options_parser() -> Command {
    Command::new("coinpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shortest 8-way path through weighted-cell mazes, fewest coins on ties")
        .arg(
            Arg::new("mazes")
                .value_name("MAZE")
                .help("Maze files to solve; defaults to the bundled 11x11, 31x31 and 101x101 mazes")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory the default maze files are read from")
                .default_value("mazes"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Report format")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("render")
                .short('r')
                .long("render")
                .help("Print each maze with its path drawn as '*'")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .help("Solve mazes concurrently")
                .action(ArgAction::SetTrue),
        )
}

impl Options {
    /// Parse options from an argument list whose first element is the
    /// binary name.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        let mazes = match matches.get_many::<String>("mazes") {
            Some(files) => files.map(PathBuf::from).collect(),
            None => {
                let dir = matches
                    .get_one::<String>("dir")
                    .map_or_else(|| PathBuf::from("mazes"), PathBuf::from);
                DEFAULT_MAZES.iter().map(|f| dir.join(f)).collect()
            }
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Ok(Options {
            mazes,
            format,
            render: matches.get_flag("render"),
            parallel: matches.get_flag("parallel"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::parse_from(["coinpath"]).unwrap();
        assert_eq!(
            opts.mazes,
            vec![
                PathBuf::from("mazes/maze_11x11.txt"),
                PathBuf::from("mazes/maze_31x31.txt"),
                PathBuf::from("mazes/maze_101x101.txt"),
            ]
        );
        assert_eq!(opts.format, OutputFormat::Text);
        assert!(!opts.render);
        assert!(!opts.parallel);
    }

    #[test]
    fn explicit_files_ignore_dir() {
        let opts = Options::parse_from(["coinpath", "-d", "elsewhere", "a.txt", "b.txt"]).unwrap();
        assert_eq!(opts.mazes, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn default_dir_override() {
        let opts = Options::parse_from(["coinpath", "--dir", "data"]).unwrap();
        assert_eq!(opts.mazes[0], PathBuf::from("data/maze_11x11.txt"));
    }

    #[test]
    fn flags_and_format() {
        let opts = Options::parse_from(["coinpath", "-f", "json", "-r", "--parallel", "m.txt"]).unwrap();
        assert_eq!(opts.format, OutputFormat::Json);
        assert!(opts.render);
        assert!(opts.parallel);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Options::parse_from(["coinpath", "--format", "xml"]).is_err());
    }
}
