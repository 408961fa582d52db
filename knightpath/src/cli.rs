use std::fmt;
use std::io::{self, Write};

use clap::Parser;
use knight_core::Point;
use knight_paths::{
    BOARD_SIZE, FIELD_RADIUS, SearchConfig, SearchError, Solution, UNIT_DISTANCE, bfs_moves,
    find_paths,
};

use crate::report::write_report;
use crate::timing::with_exec_time;

/// Window, in squares around the destination, searched by `--verify`.
const VERIFY_WINDOW: i32 = 32;

#[derive(Parser, Debug)]
#[command(name = "knightpath")]
#[command(about = "Print every shortest knight-move path between two squares", long_about = None)]
pub struct Args {
    /// Start square as X,Y
    #[arg(long, value_parser = parse_point)]
    pub from: Point,

    /// Destination square as X,Y
    #[arg(long, value_parser = parse_point)]
    pub to: Point,

    /// Board width in squares
    #[arg(long, default_value_t = BOARD_SIZE)]
    pub width: i32,

    /// Board height in squares
    #[arg(long, default_value_t = BOARD_SIZE)]
    pub height: i32,

    /// Length of one move
    #[arg(long, default_value_t = UNIT_DISTANCE)]
    pub unit: f64,

    /// Radius inside which paths may turn back (default: two moves)
    #[arg(long)]
    pub inner_radius: Option<f64>,

    /// Radius, in squares, of the field explored around the destination
    #[arg(long, default_value_t = FIELD_RADIUS)]
    pub field_radius: f64,

    /// Cross-check the result against a breadth-first search
    #[arg(long)]
    pub verify: bool,

    /// Print the solution as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn config(&self) -> SearchConfig {
        let cfg = SearchConfig::default()
            .with_board(self.width, self.height)
            .with_unit(self.unit)
            .with_field_radius(self.field_radius);
        match self.inner_radius {
            Some(r) => cfg.with_inner_radius(r),
            None => cfg,
        }
    }
}

/// Parse `X,Y` (whitespace around either number is allowed).
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad x coordinate {x:?}: {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad y coordinate {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of a [`run`].
#[derive(Debug)]
pub enum CliError {
    Search(SearchError),
    /// `--verify` disagreed with the breadth-first oracle.
    Mismatch { searched: usize, oracle: Option<u32> },
    Io(io::Error),
    Json(serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Search(SearchError::NoPathFound { .. }) => 1,
            Self::Search(_) => 2,
            Self::Mismatch { .. } => 3,
            Self::Io(_) | Self::Json(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::Mismatch {
                searched,
                oracle: Some(oracle),
            } => write!(
                f,
                "verification failed: search found {searched} moves, breadth-first search {oracle}"
            ),
            Self::Mismatch {
                searched,
                oracle: None,
            } => write!(
                f,
                "verification failed: search found {searched} moves, breadth-first search found no path"
            ),
            Self::Io(e) => write!(f, "write failed: {e}"),
            Self::Json(e) => write!(f, "json encoding failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Solve, optionally verify, and write the timing line and report to `out`.
/// `out` is flushed before returning, so a failed flush is reported as
/// [`CliError::Io`].
pub fn run(args: &Args, out: &mut impl Write) -> Result<Solution, CliError> {
    let cfg = args.config();
    log::info!("searching {} -> {} on {}", args.from, args.to, cfg.board);

    let solution = with_exec_time(out, || find_paths(&cfg, args.from, args.to))??;

    if args.verify {
        verify(&cfg, &solution)?;
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &solution)?;
        writeln!(out)?;
    } else {
        write_report(out, &solution)?;
    }
    out.flush()?;
    Ok(solution)
}

fn verify(cfg: &SearchConfig, sol: &Solution) -> Result<(), CliError> {
    let searched = sol.paths().first().map_or(0, |p| p.moves());
    let oracle = bfs_moves(cfg, sol.corrected_start, sol.destination, VERIFY_WINDOW);
    if oracle == Some(searched as u32) {
        log::info!("verified: {searched} moves");
        Ok(())
    } else {
        Err(CliError::Mismatch { searched, oracle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["knightpath"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 12 , -7 "), Ok(Point::new(12, -7)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,4").is_err());
        assert!(parse_point("3,4,5").is_err());
    }

    #[test]
    fn defaults_give_default_config() {
        let a = args(&["--from", "1,1", "--to", "5,5"]);
        assert_eq!(a.from, Point::new(1, 1));
        assert_eq!(a.to, Point::new(5, 5));
        assert_eq!(a.config(), SearchConfig::default());
    }

    #[test]
    fn overrides_reach_config() {
        let a = args(&[
            "--from",
            "1,1",
            "--to",
            "5,5",
            "--width",
            "12",
            "--height",
            "10",
            "--field-radius",
            "6",
            "--inner-radius",
            "3.5",
        ]);
        let cfg = a.config();
        assert_eq!(cfg.board, knight_core::Range::board(12, 10));
        assert_eq!(cfg.field_radius, 6.0);
        assert_eq!(cfg.inner_radius, 3.5);
    }

    #[test]
    fn missing_destination_is_rejected() {
        assert!(Args::try_parse_from(["knightpath", "--from", "1,1"]).is_err());
    }

    #[test]
    fn run_writes_timing_then_report() {
        let a = args(&["--from", "1,1", "--to", "2,3", "--verify"]);
        let mut buf = Vec::new();
        let sol = run(&a, &mut buf).unwrap();
        assert_eq!(sol.paths().len(), 1);
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Time taken: "));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("starting with: 1, 1"));
        assert!(text.ends_with("shortest distance: 2.23607\n"));
    }

    #[test]
    fn run_json_output() {
        let a = args(&["--from", "1,1", "--to", "5,5", "--json"]);
        let mut buf = Vec::new();
        run(&a, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let json = text.split_once("\n\n").unwrap().1;
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(v["destination"]["x"], 5);
        assert!(v["paths"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn run_reports_errors_with_exit_codes() {
        let mut buf = Vec::new();
        let err = run(&args(&["--from", "2,2", "--to", "1,1"]), &mut buf).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "no path found from (2,2) to (1,1)");

        let err = run(&args(&["--from", "0,2", "--to", "1,1"]), &mut buf).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn oversized_board_is_rejected_not_a_panic() {
        let mut buf = Vec::new();
        let a = args(&["--from", "5,5", "--to", "7,5", "--width", "2147483647"]);
        let err = run(&a, &mut buf).unwrap_err();
        assert!(matches!(err, CliError::Search(SearchError::InvalidConfig(_))));
        assert_eq!(err.exit_code(), 2);
    }

    /// Accepts writes, fails on flush.
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn flush_failure_is_an_io_error() {
        let mut out = FailingFlush(Vec::new());
        let err = run(&args(&["--from", "1,1", "--to", "2,3"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 4);
        assert!(!out.0.is_empty());
    }

    #[test]
    fn mismatch_message() {
        let e = CliError::Mismatch {
            searched: 3,
            oracle: Some(2),
        };
        assert_eq!(e.exit_code(), 3);
        assert_eq!(
            e.to_string(),
            "verification failed: search found 3 moves, breadth-first search 2"
        );
    }
}
