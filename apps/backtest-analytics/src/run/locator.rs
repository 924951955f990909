//! Run directory discovery.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Default prefix of run directory names (`run_20240105_153000`).
pub const DEFAULT_RUN_PREFIX: &str = "run_";

/// Strategy selecting the run directory to aggregate under a logs directory.
pub trait RunLocator {
    /// Pick a run directory, or `None` when there is nothing to show.
    fn locate(&self, logs_dir: &Path) -> Option<PathBuf>;
}

impl<F> RunLocator for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn locate(&self, logs_dir: &Path) -> Option<PathBuf> {
        self(logs_dir)
    }
}

/// Picks the run whose directory name sorts last.
///
/// Names are ordered by [`compare_run_names`], so both zero-padded
/// timestamps and plain counters (`run_2` before `run_10`) put the most
/// recent run last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRunLocator {
    prefix: String,
}

impl LatestRunLocator {
    /// Locator for directories named `<prefix>*`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LatestRunLocator {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_PREFIX)
    }
}

impl RunLocator for LatestRunLocator {
    fn locate(&self, logs_dir: &Path) -> Option<PathBuf> {
        list_runs(logs_dir, &self.prefix).pop()
    }
}

/// Always selects one known run directory, if it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRunLocator(pub PathBuf);

impl RunLocator for FixedRunLocator {
    fn locate(&self, _logs_dir: &Path) -> Option<PathBuf> {
        self.0.is_dir().then(|| self.0.clone())
    }
}

/// Run directories under `logs_dir` named `<prefix>*`, ordered by
/// [`compare_run_names`].
///
/// A missing or unreadable `logs_dir` yields `[]`.
#[must_use]
pub fn list_runs(logs_dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(logs_dir) else {
        return Vec::new();
    };

    let mut runs: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .filter(|(name, _)| name.starts_with(prefix))
        .collect();
    runs.sort_by(|(a, _), (b, _)| compare_run_names(a, b));
    runs.into_iter().map(|(_, path)| path).collect()
}

/// Natural order of run names: digit runs compare by numeric value,
/// everything else as text.
///
/// Names equal under that rule fall back to plain text order.
#[must_use]
pub fn compare_run_names(a: &str, b: &str) -> Ordering {
    let (left, right) = (name_chunks(a), name_chunks(b));

    for (x, y) in left.iter().zip(&right) {
        let ord = match (parse_digits(x), parse_digits(y)) {
            (Some(x), Some(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
            _ => x.cmp(y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// Split a name into alternating digit and non-digit runs.
fn name_chunks(name: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;

    for (idx, c) in name.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|prev| prev != digit) {
            chunks.push(&name[start..idx]);
            start = idx;
        }
        prev_digit = Some(digit);
    }
    if start < name.len() {
        chunks.push(&name[start..]);
    }
    chunks
}

/// Significant digits of an all-digit chunk.
fn parse_digits(chunk: &str) -> Option<&str> {
    chunk
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| chunk.trim_start_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_latest_run_is_last_by_name() {
        let dir = tempdir().unwrap();
        for name in ["run_20240101_090000", "run_20240301_090000", "run_20240201_090000"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("scratch")).unwrap();
        fs::write(dir.path().join("run_99999999.txt"), "not a dir").unwrap();

        let runs = list_runs(dir.path(), DEFAULT_RUN_PREFIX);
        assert_eq!(runs.len(), 3);

        let latest = LatestRunLocator::default().locate(dir.path()).unwrap();
        assert!(latest.ends_with("run_20240301_090000"));
    }

    #[test]
    fn test_unpadded_counters_order_numerically() {
        let dir = tempdir().unwrap();
        for name in ["run_2", "run_10", "run_9"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let names: Vec<String> = list_runs(dir.path(), DEFAULT_RUN_PREFIX)
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, ["run_2", "run_9", "run_10"]);

        let latest = LatestRunLocator::default().locate(dir.path()).unwrap();
        assert!(latest.ends_with("run_10"));
    }

    #[test]
    fn test_compare_run_names() {
        assert_eq!(compare_run_names("run_2", "run_10"), Ordering::Less);
        assert_eq!(
            compare_run_names("run_20240105_153000", "run_20240106_090000"),
            Ordering::Less
        );
        assert_eq!(compare_run_names("run_a", "run_b"), Ordering::Less);
        assert_eq!(compare_run_names("run_007", "run_7"), Ordering::Less);
        assert_eq!(compare_run_names("run_1", "run_1"), Ordering::Equal);
    }

    #[test]
    fn test_no_runs() {
        let dir = tempdir().unwrap();
        assert_eq!(LatestRunLocator::default().locate(dir.path()), None);
        assert_eq!(
            LatestRunLocator::default().locate(&dir.path().join("missing")),
            None
        );
    }

    #[test]
    fn test_custom_prefix_and_closure_locator() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("bt_a")).unwrap();
        fs::create_dir(dir.path().join("run_a")).unwrap();

        let located = LatestRunLocator::new("bt_").locate(dir.path()).unwrap();
        assert!(located.ends_with("bt_a"));

        let first = |logs: &Path| list_runs(logs, "").into_iter().next();
        assert!(first.locate(dir.path()).unwrap().ends_with("bt_a"));
    }

    #[test]
    fn test_fixed_locator() {
        let dir = tempdir().unwrap();
        let run = dir.path().join("anything");
        fs::create_dir(&run).unwrap();

        assert_eq!(FixedRunLocator(run.clone()).locate(dir.path()), Some(run));
        assert_eq!(
            FixedRunLocator(dir.path().join("gone")).locate(dir.path()),
            None
        );
    }
}
