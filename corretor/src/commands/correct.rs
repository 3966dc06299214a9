//! The `correct` command: apply every rule to a text and report the changes.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};

use corretor_core::{CorrectionEngine, CorrectionResult, RuleEngine, RuleStore};

use crate::cli::CorrectCommand;
use crate::ui::{change_summary, diff_viewer, OutputStyle};

/// Reads the text to correct from the argument, the input file or stdin.
fn read_input(cmd: &CorrectCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.input_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}

/// Builds an engine from the store's current snapshot.
pub fn load_engine(store: &dyn RuleStore) -> Result<RuleEngine> {
    let rules = store.list_rules().context("Failed to load rules")?;
    let engine = RuleEngine::new(rules);
    let compiled = engine.compiled_rules();
    debug!(
        "Engine ready with {} rule(s) ({} skipped).",
        compiled.rules.len(),
        compiled.skipped
    );
    Ok(engine)
}

pub fn run_correct(
    store: &dyn RuleStore,
    cmd: &CorrectCommand,
    style: &OutputStyle,
) -> Result<()> {
    info!("Starting correction.");
    let engine = load_engine(store)?;

    if cmd.line_buffered {
        return run_line_buffered(&engine, cmd, style);
    }

    let input = read_input(cmd)?;
    let result = engine.correct(&input);
    debug!(
        "Input corrected. Original length: {}, corrected length: {}",
        input.len(),
        result.corrected_text.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cmd.json {
        let report = result.into_report(&input);
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to write JSON report")?;
        writeln!(out)?;
        return Ok(());
    }

    write_corrected(&mut out, &result)?;
    if cmd.diff {
        writeln!(out)?;
        diff_viewer::print_diff(&input, &result.corrected_text, &mut out, style.stdout_color)?;
    }
    out.flush()?;

    if !cmd.no_summary && !style.quiet {
        change_summary::print_summary(&result.changes, &mut io::stderr(), style.stderr_color)?;
    }
    info!("Correction completed with {} change(s).", result.changes.len());
    Ok(())
}

/// Writes the corrected text, adding a final newline only when it lacks one.
fn write_corrected<W: Write>(out: &mut W, result: &CorrectionResult) -> io::Result<()> {
    out.write_all(result.corrected_text.as_bytes())?;
    if !result.corrected_text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// Splits a line read with `read_line` into its content and its terminator.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Corrects one line and writes it back with its original terminator.
fn correct_line<W: Write>(
    engine: &RuleEngine,
    line: &str,
    out: &mut W,
) -> io::Result<CorrectionResult> {
    let (content, ending) = split_line_ending(line);
    let result = engine.correct(content);
    out.write_all(result.corrected_text.as_bytes())?;
    out.write_all(ending.as_bytes())?;
    out.flush()?;
    Ok(result)
}

fn run_line_buffered(
    engine: &RuleEngine,
    cmd: &CorrectCommand,
    style: &OutputStyle,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_changes = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read line from stdin")?;
        if read == 0 {
            break;
        }
        let result = correct_line(engine, &line, &mut out)?;
        all_changes.extend(result.changes);
    }

    if !cmd.no_summary && !style.quiet {
        change_summary::print_summary(&all_changes, &mut io::stderr(), style.stderr_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corretor_core::{ChangeRecord, MemoryRuleStore, NewRule};

    #[test]
    fn corrected_text_gets_single_trailing_newline() {
        let mut buf = Vec::new();
        let result = CorrectionResult {
            corrected_text: "nós vamos\n".to_string(),
            changes: vec![ChangeRecord::new("nós vai", "nós vamos")],
        };
        write_corrected(&mut buf, &result).unwrap();
        assert_eq!(buf, b"n\xc3\xb3s vamos\n");

        let mut buf = Vec::new();
        write_corrected(&mut buf, &CorrectionResult::unchanged("sem quebra")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "sem quebra\n");
    }

    #[test]
    fn line_endings_are_split_off() {
        assert_eq!(split_line_ending("ele vai\r\n"), ("ele vai", "\r\n"));
        assert_eq!(split_line_ending("ele vai\n"), ("ele vai", "\n"));
        assert_eq!(split_line_ending("ele vai"), ("ele vai", ""));
        assert_eq!(split_line_ending("\r"), ("\r", ""));
    }

    #[test]
    fn corrected_line_keeps_its_terminator() {
        let store = MemoryRuleStore::with_rules(vec![NewRule::new("vai", "vou")]).unwrap();
        let engine = load_engine(&store).unwrap();

        let mut buf = Vec::new();
        for line in ["ele vai\r\n", "ok\r\n", "Vai"] {
            correct_line(&engine, line, &mut buf).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "ele vou\r\nok\r\nVou");
    }
}
