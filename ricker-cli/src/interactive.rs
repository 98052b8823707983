use ricker_power::{Explorer, SweepParam};
use std::io::{BufRead, Write};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Set(SweepParam, f64),
    Show,
    Help,
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<Line, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Line::Blank);
    };
    match head {
        "show" => return Ok(Line::Show),
        "help" | "?" => return Ok(Line::Help),
        "quit" | "exit" | "q" => return Ok(Line::Quit),
        _ => {}
    }

    let param: SweepParam = head.parse()?;
    let value = words
        .next()
        .ok_or_else(|| format!("missing value for {param}"))?;
    let value: f64 = value
        .parse()
        .map_err(|e| format!("bad value '{value}' for {param}: {e}"))?;
    if words.next().is_some() {
        return Err("expected `<param> <value>`".into());
    }
    Ok(Line::Set(param, value))
}

const HELP: &str = "commands: <fpeak|scalar|length|interval> <value>, show, help, quit";

/// Apply each parameter change to `explorer` and print the refreshed frame.
pub fn run<R: BufRead, W: Write>(
    explorer: &mut Explorer,
    input: R,
    mut out: W,
    render: impl Fn(&ricker_power::Frame) -> Result<String, String>,
) -> Result<(), String> {
    let frame = explorer.refresh().map_err(|e| e.to_string())?;
    write!(out, "{}", render(frame)?).map_err(|e| e.to_string())?;

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        match parse_line(&line) {
            Ok(Line::Set(param, value)) => {
                let params = param.apply(explorer.params(), value);
                if !(params.signal_length_ms > 0.0 && params.sample_interval_ms > 0.0) {
                    writeln!(out, "length and interval must be positive").map_err(|e| e.to_string())?;
                    continue;
                }
                match explorer.update(params) {
                    Ok(frame) => write!(out, "{}", render(frame)?).map_err(|e| e.to_string())?,
                    Err(e) => writeln!(out, "error: {e}").map_err(|e| e.to_string())?,
                }
            }
            Ok(Line::Show) => {
                if let Some(frame) = explorer.current() {
                    write!(out, "{}", render(frame)?).map_err(|e| e.to_string())?;
                }
            }
            Ok(Line::Help) => writeln!(out, "{HELP}").map_err(|e| e.to_string())?,
            Ok(Line::Quit) => break,
            Ok(Line::Blank) => {}
            Err(e) => {
                log::info!("rejected input line: {line}");
                writeln!(out, "{e}").map_err(|e| e.to_string())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ricker_power::view::table::sweep_table;

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_line("interval 2.5"), Ok(Line::Set(SweepParam::SampleInterval, 2.5)));
        assert_eq!(parse_line("  scalar -3 "), Ok(Line::Set(SweepParam::AmplitudeScalar, -3.0)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_line(""), Ok(Line::Blank));
        assert_eq!(parse_line("show"), Ok(Line::Show));
        assert_eq!(parse_line("quit"), Ok(Line::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("fpeak").is_err());
        assert!(parse_line("fpeak abc").is_err());
        assert!(parse_line("width 3").is_err());
        assert!(parse_line("fpeak 3 4").is_err());
    }

    #[test]
    fn test_session_follows_input() {
        let mut ex = Explorer::default();
        let input = "length 8\nbogus\ninterval 0\nquit\nlength 100\n";
        let mut out = Vec::new();
        run(&mut ex, input.as_bytes(), &mut out, |f| {
            Ok(sweep_table(std::slice::from_ref(f)))
        })
        .unwrap();

        // Initial frame plus the `length 8` update; `quit` stops before `length 100`.
        assert_eq!(ex.params().signal_length_ms, 8.0);
        assert_eq!(ex.current().unwrap().stamp, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown sweep parameter 'bogus'"));
        assert!(text.contains("must be positive"));
    }
}
