//! `coinpath` — solve maze files and print the coin report.
//!
//! Run: cargo run -- [MAZE...]
//!
//! Set `COINPATH_LOG=debug` to see loader and search statistics.

mod options;
mod report;

use std::path::Path;

use coinpath_core::{MazeError, Puzzle, load_maze};
use coinpath_search::{PathFinder, SearchResult};
use rayon::prelude::*;

use options::{Options, OutputFormat};
use report::MazeReport;

/// A maze that was loaded and searched.
struct Solved {
    label: String,
    puzzle: Puzzle,
    result: SearchResult,
}

/// Label a maze by its file stem.
fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn solve_file(finder: &mut PathFinder, path: &Path) -> Result<Solved, MazeError> {
    let puzzle = load_maze(path)?;
    let result = finder.solve(&puzzle.maze, puzzle.start, puzzle.goal);
    let label = label_for(path);
    log::info!(
        "{label}: {} ({} states pushed)",
        match result.coins() {
            Some(c) => format!("{c} coins over {} cells", result.path_len()),
            None => "unreachable".to_string(),
        },
        finder.stats().pushed
    );
    Ok(Solved {
        label,
        puzzle,
        result,
    })
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let outcomes: Vec<Result<Solved, MazeError>> = if options.parallel {
        options
            .mazes
            .par_iter()
            .map_init(PathFinder::new, |finder, path| solve_file(finder, path))
            .collect()
    } else {
        let mut finder = PathFinder::new();
        options
            .mazes
            .iter()
            .map(|path| solve_file(&mut finder, path))
            .collect()
    };

    let mut solved = Vec::with_capacity(outcomes.len());
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(s) => solved.push(s),
            Err(e) => {
                eprintln!("Error: {e}");
                failed += 1;
            }
        }
    }

    let reports: Vec<MazeReport> = solved
        .iter()
        .map(|s| MazeReport::new(s.label.as_str(), &s.result))
        .collect();

    match options.format {
        OutputFormat::Text => {
            if options.render {
                for s in &solved {
                    println!("{}:", s.label);
                    print!("{}", s.puzzle.maze.render(s.result.path()));
                    println!();
                }
            }
            print!("{}", report::text_report(&reports));
        }
        OutputFormat::Json => println!("{}", report::json_report(&reports)?),
    }

    if failed > 0 {
        return Err(format!("{failed} of {} mazes could not be loaded", options.mazes.len()).into());
    }
    Ok(())
}

fn main() {
    if std::env::var("COINPATH_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("COINPATH_LOG")
            .write_style("COINPATH_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let options = match Options::parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    log::debug!("options: {options:?}");

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("coinpath-{}-{name}", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn label_is_file_stem() {
        assert_eq!(label_for(Path::new("mazes/maze_11x11.txt")), "maze_11x11");
    }

    #[test]
    fn solve_file_reports_result() {
        let path = write_temp("solve.txt", "S10\n0X0\n01G\n");
        let mut finder = PathFinder::new();
        let solved = solve_file(&mut finder, &path).unwrap();
        fs::remove_file(&path).unwrap();
        let report = MazeReport::new(solved.label.as_str(), &solved.result);
        assert_eq!(report.coins, 1);
        assert_eq!(report.path_len, 4);
    }

    #[test]
    fn run_fails_after_reporting_when_a_maze_is_missing() {
        let good = write_temp("good.txt", "S1G\n");
        let options = Options {
            mazes: vec![good.clone(), PathBuf::from("/nonexistent/coinpath.txt")],
            format: OutputFormat::Text,
            render: false,
            parallel: true,
        };
        let err = run(&options).unwrap_err();
        fs::remove_file(&good).unwrap();
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn bundled_mazes_load_and_solve() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../mazes");
        for name in options::DEFAULT_MAZES {
            let mut finder = PathFinder::new();
            let solved = solve_file(&mut finder, &dir.join(name)).unwrap();
            assert!(solved.result.is_found(), "{name} should be solvable");
        }
    }
}
