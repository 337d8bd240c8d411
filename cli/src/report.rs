//! Console and JSON reports.

use coinpath_core::Coord;
use coinpath_search::SearchResult;
use serde::Serialize;

/// Outcome for one maze file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeReport {
    pub label: String,
    /// Coins collected, or -1 if the goal is unreachable.
    pub coins: i64,
    /// Number of cells on the path, start and goal included.
    pub path_len: usize,
    pub path: Vec<Coord>,
}

impl MazeReport {
    pub fn new(label: impl Into<String>, result: &SearchResult) -> Self {
        Self {
            label: label.into(),
            coins: result.coins_or_sentinel(),
            path_len: result.path_len(),
            path: result.path().to_vec(),
        }
    }

    /// `label -> Coins Collected: N, Steps: M`
    pub fn summary_line(&self) -> String {
        format!(
            "{} -> Coins Collected: {}, Steps: {}",
            self.label, self.coins, self.path_len
        )
    }
}

/// The comma-separated coin totals, in report order.
pub fn submission_line(reports: &[MazeReport]) -> String {
    reports
        .iter()
        .map(|r| r.coins.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Full text report: one summary line per maze, then the submission block.
pub fn text_report(reports: &[MazeReport]) -> String {
    let mut out = String::new();
    for r in reports {
        out.push_str(&r.summary_line());
        out.push('\n');
    }
    out.push_str("\nSubmission Format:\n");
    out.push_str(&submission_line(reports));
    out.push('\n');
    out.push_str("Time Complexity: O(N^2 log N) due to priority queue and revisits\n");
    out.push_str("Space Complexity: O(N^2) for visited map and path tracking\n");
    out
}

/// Pretty-printed JSON array of reports.
pub fn json_report(reports: &[MazeReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports() -> Vec<MazeReport> {
        vec![
            MazeReport::new(
                "maze_a",
                &SearchResult::Found {
                    coins: 3,
                    path: vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
                },
            ),
            MazeReport::new("maze_b", &SearchResult::Unreachable),
        ]
    }

    #[test]
    fn summary_counts_path_cells() {
        let r = reports();
        assert_eq!(r[0].summary_line(), "maze_a -> Coins Collected: 3, Steps: 3");
        assert_eq!(r[1].summary_line(), "maze_b -> Coins Collected: -1, Steps: 0");
    }

    #[test]
    fn text_layout() {
        let text = text_report(&reports());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "maze_a -> Coins Collected: 3, Steps: 3");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Submission Format:");
        assert_eq!(lines[4], "3,-1");
        assert!(lines[5].starts_with("Time Complexity:"));
        assert!(lines[6].starts_with("Space Complexity:"));
    }

    #[test]
    fn json_layout() {
        let json = json_report(&reports()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["label"], "maze_a");
        assert_eq!(v[0]["coins"], 3);
        assert_eq!(v[0]["path_len"], 3);
        assert_eq!(v[0]["path"][1]["row"], 1);
        assert_eq!(v[1]["coins"], -1);
        assert_eq!(v[1]["path"].as_array().map(Vec::len), Some(0));
    }
}
