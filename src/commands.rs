//! CLI commands: copy, links, hit.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Serialize;

use crate::config::Config;
use crate::engine::ScratchpadEngine;
use crate::error::Error;
use crate::host::CliHost;
use crate::links::{self, LinkTable};
use crate::navigation;
use crate::pane::{CursorShape, MouseButton, ScratchPane};
use crate::render;
use crate::scanner::Scanner;
use crate::types::{LinkRecord, OpenRequest};

/// JSON report for `copy --json`.
#[derive(Serialize)]
struct CopyReport<'a> {
    /// Cursor changes caused by each `--hover`, `None` when unchanged.
    hovers: Vec<HoverReport>,
    /// Links in the final buffer.
    links: &'a [LinkRecord],
    /// Open requests caused by each `--click`, in order.
    opened: Vec<OpenRequest>,
    /// Final buffer text.
    text: &'a str,
}

/// One replayed pointer move.
#[derive(Serialize)]
struct HoverReport {
    /// New cursor shape, or `None` when the shape did not change.
    cursor: Option<&'static str>,
    /// Character offset hovered.
    offset: usize,
}

/// Copy each selection into a fresh pane, print it, then replay hovers and clicks.
///
/// # Errors
///
/// Returns errors from config loading, selection parsing, file reading, or
/// JSON output.
pub fn copy(selections: &[String], hovers: &[usize], clicks: &[usize], json: bool) -> Result<(), Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let engine = ScratchpadEngine::new(config.header);
    let mut pane = ScratchPane::new(&config.editor)?;
    let mut host = CliHost::new(config);

    for spec in selections {
        host.select(spec)?;
        engine.copy_selection(&mut host, &mut pane);
    }
    tracing::debug!(
        event = "scratchpad.commands.copied",
        selections = selections.len(),
        revealed = host.shown()
    );

    let hover_reports: Vec<HoverReport> = hovers
        .iter()
        .map(|&offset| {
            let cursor = pane.on_pointer_move(offset).map(cursor_name);
            return HoverReport { cursor, offset };
        })
        .collect();

    for &offset in clicks {
        let outcome = pane.on_click(offset, MouseButton::Primary, &mut host);
        if outcome.followed.is_none() {
            tracing::debug!(event = "scratchpad.commands.click_missed", offset);
        }
    }
    let opened = host.drain_opened();

    if json {
        let report = CopyReport {
            hovers: hover_reports,
            links: pane.links().records(),
            opened,
            text: pane.text(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if std::io::stdout().is_terminal() {
        print!("{}", render::render_ansi(pane.text(), pane.tags()));
    } else {
        print!("{}", pane.text());
    }
    println!();
    println!("## Links\n");
    print!("{}", render::render_link_list(pane.links().records()));

    for hover in &hover_reports {
        println!("hover {}: {}", hover.offset, hover.cursor.unwrap_or("unchanged"));
    }
    for request in &opened {
        println!("{}", describe_open(request));
    }

    return Ok(());
}

/// Name of a cursor shape in reports.
const fn cursor_name(shape: CursorShape) -> &'static str {
    return match shape {
        CursorShape::Pointer => "pointer",
        CursorShape::Text => "text",
    };
}

/// `open path:line [project]`.
fn describe_open(request: &OpenRequest) -> String {
    let target = format!("open {}:{}", request.path.display(), request.line);
    return match &request.project {
        Some(project) => format!("{target} [{}]", project.name),
        None => target,
    };
}

/// Hit-test `offset` in the text of `file` (or stdin). Exit 0 on a hit, 1 on a miss.
///
/// # Errors
///
/// Returns errors from reading input or loading config.
pub fn hit(offset: usize, file: Option<&Path>, open: bool) -> Result<ExitCode, Error> {
    let text = read_input(file)?;
    let table = index_text(&text)?;

    let Some(record) = links::find_link_at(&table, offset) else {
        println!("no link at {offset}");
        return Ok(ExitCode::from(1));
    };
    print!("{}", render::render_link_list(std::slice::from_ref(record)));

    if open {
        let config = Config::load(Path::new("."))?;
        let mut host = CliHost::new(config);
        navigation::navigate(&mut host, &record.target_path, record.target_line);
        for request in host.drain_opened() {
            println!("{}", describe_open(&request));
        }
    }

    return Ok(ExitCode::SUCCESS);
}

/// Index `text` into a link table.
///
/// # Errors
///
/// Returns `Error::Pattern` if the reference pattern fails to compile.
fn index_text(text: &str) -> Result<LinkTable, Error> {
    let scanner = Scanner::new()?;
    let mut table = LinkTable::new();
    table.rebuild(&scanner, text);
    return Ok(table);
}

/// List every link in the text of `file` (or stdin).
///
/// # Errors
///
/// Returns errors from reading input or JSON output.
pub fn links(file: Option<&Path>, json: bool) -> Result<(), Error> {
    let text = read_input(file)?;
    let table = index_text(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(table.records())?);
    } else if table.is_empty() {
        eprintln!("No links found.");
    } else {
        print!("{}", render::render_link_list(table.records()));
    }

    return Ok(());
}

/// Read `file`, or all of stdin when no file is given.
///
/// # Errors
///
/// Returns `Error::FileNotFound` for an unreadable file, or `Error::Io` for stdin.
fn read_input(file: Option<&Path>) -> Result<String, Error> {
    return match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|_err| return Error::FileNotFound { path: path.to_path_buf() }),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    };
}
