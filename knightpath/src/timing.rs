use std::io::{self, Write};
use std::time::Instant;

/// Run `f`, then write `Time taken: {secs:.2}s` and a blank line to `out`.
pub fn with_exec_time<T>(out: &mut impl Write, f: impl FnOnce() -> T) -> io::Result<T> {
    let started = Instant::now();
    let result = f();
    writeln!(out, "Time taken: {:.2}s\n", started.elapsed().as_secs_f64())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_result_through_and_reports_time() {
        let mut buf = Vec::new();
        let v = with_exec_time(&mut buf, || 6 * 7).unwrap();
        assert_eq!(v, 42);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Time taken: "));
        assert!(text.ends_with("s\n\n"));
        let secs = text["Time taken: ".len()..text.len() - 3].parse::<f64>().unwrap();
        assert!(secs >= 0.0);
    }
}
