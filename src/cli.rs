//! Command-line shell.
//!
//! Parses options, loads the YAML problem description, runs the
//! assignment pipeline, and prints one line per assignment. Failures
//! are reported distinctly: a data or usage problem exits 2, an
//! infeasible model or solver failure exits 1. No partial assignment
//! is ever printed.

use std::fs;

use crate::config::AssignConfig;
use crate::milp::{assign, AssignError};
use crate::models::ProblemDescription;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// Assignment configuration assembled from the flags.
    pub config: AssignConfig,
    /// Path to the YAML problem description.
    pub description_path: String,
}

const USAGE: &str = "usage: review-assign [options] <description.yaml>

Assigns papers to reviewers, maximizing reviewer happiness subject to
conflict-of-interest, workload, and coverage constraints.

options:
  --weight-no <f>                 happiness for an unwanted paper (default -10)
  --weight-maybe <f>              happiness for a maybe-wanted paper (default -3)
  --weight-yes <f>                happiness for a wanted paper (default -1)
  --max-assignments <n>           papers per reviewer (default 3)
  --reduced-max-assignments <n>   papers per reduced-load reviewer (default 1)
  --min-paper-reviewers <n>       minimum reviewers per paper (default 1)
  --max-paper-reviewers <n>       maximum reviewers per paper (default 3)
  --help                          print this message";

/// Parses options from `args` (including the program name at index 0).
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut config = AssignConfig::default();
    let mut description_path: Option<String> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--weight-no" => config.weights.no = parse_value(iter.next(), arg)?,
            "--weight-maybe" => config.weights.maybe = parse_value(iter.next(), arg)?,
            "--weight-yes" => config.weights.yes = parse_value(iter.next(), arg)?,
            "--max-assignments" => config.max_assignments = parse_value(iter.next(), arg)?,
            "--reduced-max-assignments" => {
                config.reduced_max_assignments = parse_value(iter.next(), arg)?
            }
            "--min-paper-reviewers" => {
                config.min_paper_reviewers = parse_value(iter.next(), arg)?
            }
            "--max-paper-reviewers" => {
                config.max_paper_reviewers = parse_value(iter.next(), arg)?
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {other}"));
            }
            other => {
                if description_path.replace(other.to_string()).is_some() {
                    return Err("only one description file may be given".to_string());
                }
            }
        }
    }

    match description_path {
        Some(description_path) => Ok(CliOptions {
            config,
            description_path,
        }),
        None => Err("missing description file".to_string()),
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag}: invalid value '{raw}'"))
}

/// Runs the CLI and returns the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    if args.iter().skip(1).any(|a| a == "--help") {
        println!("{USAGE}");
        return 0;
    }

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return 2;
        }
    };

    let text = match fs::read_to_string(&options.description_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", options.description_path);
            return 2;
        }
    };

    let description = match ProblemDescription::from_yaml_str(&text) {
        Ok(description) => description,
        Err(err) => {
            eprintln!("malformed description file: {err}");
            return 2;
        }
    };

    match assign(&description, &options.config) {
        Ok(plan) => {
            for a in &plan.assignments {
                println!("{} assigned to {}", a.reviewer_id, a.paper_id);
            }
            0
        }
        Err(AssignError::Data(errors)) => {
            eprintln!("invalid problem description:");
            for e in errors {
                eprintln!("  {e}");
            }
            2
        }
        Err(AssignError::Config(errors)) => {
            eprintln!("invalid configuration:");
            for e in errors {
                eprintln!("  {e}");
            }
            2
        }
        Err(err @ AssignError::Infeasible) => {
            eprintln!("{err}");
            1
        }
        Err(AssignError::Solver(message)) => {
            eprintln!("solver failure: {message}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("review-assign")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_with_path() {
        let options = parse_options(&args(&["biddings.yaml"])).unwrap();
        assert_eq!(options.description_path, "biddings.yaml");
        assert_eq!(options.config, AssignConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let options = parse_options(&args(&[
            "--weight-no",
            "-20",
            "--weight-maybe",
            "-5",
            "--weight-yes",
            "-0.5",
            "--max-assignments",
            "4",
            "--reduced-max-assignments",
            "2",
            "--min-paper-reviewers",
            "2",
            "--max-paper-reviewers",
            "5",
            "biddings.yaml",
        ]))
        .unwrap();

        assert_eq!(options.config.weights.no, -20.0);
        assert_eq!(options.config.weights.maybe, -5.0);
        assert_eq!(options.config.weights.yes, -0.5);
        assert_eq!(options.config.max_assignments, 4);
        assert_eq!(options.config.reduced_max_assignments, 2);
        assert_eq!(options.config.min_paper_reviewers, 2);
        assert_eq!(options.config.max_paper_reviewers, 5);
    }

    #[test]
    fn test_missing_path() {
        assert!(parse_options(&args(&["--max-assignments", "4"])).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_options(&args(&["--frobnicate", "x.yaml"])).unwrap_err();
        assert!(err.contains("unknown option"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_options(&args(&["x.yaml", "--max-assignments"])).unwrap_err();
        assert!(err.contains("needs a value"));
    }

    #[test]
    fn test_bad_value() {
        let err = parse_options(&args(&["--max-assignments", "many", "x.yaml"])).unwrap_err();
        assert!(err.contains("invalid value"));
    }

    #[test]
    fn test_negative_count_rejected() {
        // Caps are unsigned; a negative count is a parse error.
        let err = parse_options(&args(&["--max-assignments", "-1", "x.yaml"])).unwrap_err();
        assert!(err.contains("invalid value"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        assert!(parse_options(&args(&["a.yaml", "b.yaml"])).is_err());
    }

    #[test]
    fn test_missing_file_exit_code() {
        assert_eq!(run_with_args(&args(&["/nonexistent/biddings.yaml"])), 2);
    }

    #[test]
    fn test_help_exit_code() {
        assert_eq!(run_with_args(&args(&["--help"])), 0);
    }

    #[test]
    fn test_end_to_end_assignment() {
        let path = std::env::temp_dir().join("review-assign-cli-test.yaml");
        fs::write(
            &path,
            "reviewers: [r1]\npapers: [p1]\nbiddings:\n  r1: { p1: \"yes\" }\n",
        )
        .unwrap();
        let code = run_with_args(&args(&[path.to_str().unwrap()]));
        fs::remove_file(&path).ok();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_infeasible_exit_code() {
        let path = std::env::temp_dir().join("review-assign-cli-infeasible.yaml");
        fs::write(
            &path,
            "reviewers: [r1]\npapers: [p1]\nbiddings:\n  r1: { p1: coi }\n",
        )
        .unwrap();
        let code = run_with_args(&args(&[path.to_str().unwrap()]));
        fs::remove_file(&path).ok();
        assert_eq!(code, 1);
    }
}
