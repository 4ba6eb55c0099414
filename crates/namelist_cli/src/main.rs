//! Interactive record list host.
//!
//! # Responsibility
//! - Stand in for the page: read form submissions and button presses from
//!   stdin, paint the list on stdout.
//! - Bootstrap file logging from the environment before serving input.
//!
//! # Invariants
//! - One malformed input line never ends the session; it is reported on
//!   stderr and the next line is served.

mod terminal;

use log::{debug, error, info, warn};
use namelist_core::{
    init_with_settings, parse_command, Command, InMemoryRecordStore, LogSettings,
    RecordListController, HELP_TEXT,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use terminal::TerminalRenderer;

type Controller<W> = RecordListController<InMemoryRecordStore, TerminalRenderer<W>>;

fn main() -> ExitCode {
    match LogSettings::from_env().and_then(init_with_settings) {
        Ok(()) => info!("event=cli_start module=cli status=ok"),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let mut controller = RecordListController::new(
        InMemoryRecordStore::new(),
        TerminalRenderer::new(io::stdout()),
    );

    match run(&mut controller, io::stdin().lock(), &mut io::stdout()) {
        Ok(()) => {
            info!(
                "event=cli_exit module=cli status=ok records={}",
                controller.records().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Serves input lines until `quit` or end of input.
///
/// Rows are painted through the controller's renderer; prompts, messages
/// and exports go to `out`.
///
/// # Errors
/// Only I/O failures on `input` or `out`. Undecodable or unparsable lines
/// are reported and skipped.
fn run<W: Write>(
    controller: &mut Controller<W>,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "namelist {} (type `help`)", namelist_core::core_version())?;
    controller.refresh();

    let mut buf = Vec::new();
    loop {
        prompt(out)?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!("event=input_decode module=cli status=error error={err}");
                eprintln!("skipped line: not valid UTF-8 ({err})");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(command) => execute(controller, command, out)?,
            Err(err) => eprintln!("{err}"),
        }
    }
}

fn execute<W: Write>(
    controller: &mut Controller<W>,
    command: Command,
    out: &mut impl Write,
) -> io::Result<()> {
    let mutation = command.is_mutation();
    match command {
        Command::Add(name) => {
            controller.submit_form(name);
        }
        Command::Rename { id, name } => {
            if !controller.rename(id, name) {
                writeln!(out, "unchanged: no record with id {id}")?;
            }
        }
        Command::Delete(id) => {
            controller.delete(id);
        }
        Command::Press(row) => match controller.renderer().action_for_row(row) {
            Some(action) => {
                controller.trigger(action);
            }
            None => writeln!(out, "no row {row} displayed")?,
        },
        Command::List => controller.refresh(),
        Command::Export => {
            let json = serde_json::to_string_pretty(controller.records())
                .map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Quit => {}
    }
    if mutation {
        debug!(
            "event=command_exec module=cli status=ok records={}",
            controller.records().len()
        );
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{run, Controller};
    use namelist_core::{InMemoryRecordStore, RecordListController};
    use crate::terminal::TerminalRenderer;

    fn session(input: &[u8]) -> (Controller<Vec<u8>>, String) {
        let mut controller =
            RecordListController::new(InMemoryRecordStore::new(), TerminalRenderer::new(Vec::new()));
        let mut out = Vec::new();
        run(&mut controller, input, &mut out).unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    fn last_paint(controller: Controller<Vec<u8>>) -> String {
        let (_, renderer) = controller.into_parts();
        let painted = String::from_utf8(renderer.into_inner()).unwrap();
        let start = painted.rfind("-- records (").unwrap();
        painted[start..].to_string()
    }

    #[test]
    fn pressing_a_row_deletes_it_and_export_reflects_the_store() {
        let (controller, out) = session(b"add Ana\nadd Luis\npress 1\nexport\n");

        let names: Vec<_> = controller
            .records()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Luis"]);

        assert!(out.contains("\"name\": \"Luis\""));
        assert!(!out.contains("Ana"));

        let paint = last_paint(controller);
        assert!(paint.starts_with("-- records (1) --"));
        assert!(paint.contains("  1. Luis  [delete id="));
        assert!(!paint.contains("Ana"));
    }

    #[test]
    fn invalid_utf8_line_is_skipped_and_session_continues() {
        let (controller, _) = session(b"add Ana\nadd \xff\xfe\nadd Luis\n");

        let names: Vec<_> = controller
            .records()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana", "Luis"]);
    }

    #[test]
    fn rename_miss_and_missing_row_are_reported_and_quit_stops_input() {
        let (controller, out) = session(b"add Ana\nrename 1 Bea\npress 4\nquit\nadd Late\n");

        assert!(out.contains("unchanged: no record with id 1"));
        assert!(out.contains("no row 4 displayed"));
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.records()[0].name, "Ana");
    }
}
