//! Turns a sketched tree description into an ordered list of entries.
//!
//! Parsing is pure text processing: no filesystem access happens here. The
//! output order equals a pre-order depth-first traversal of the sketched
//! tree, which is what the planner's path stack relies on.

use crate::errors::SproutError;

/// Indentation width assumed when neither a flag nor a preference supplies one.
pub const DEFAULT_INDENT_UNIT: usize = 4;

const VERTICAL: char = '│';
const BRANCH: char = '├';
const CORNER: char = '└';
const FILL: char = '─';

/// Whether a parsed entry names a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One line of the sketch after glyph stripping and depth inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub depth: usize,
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Rewrites the decorative connector columns at the start of a line as plain
/// indentation, one unit of spaces per column, then drops stray glyphs from
/// the name column.
///
/// A vertical rail plus its alignment spaces spans one column, as does a
/// branch or corner connector plus its horizontal fill. Rewriting columns to
/// a fixed-width block is more robust to irregular fill widths than counting
/// the raw characters. A leading tab also counts as one unit.
fn normalize_connectors(line: &str, indent_unit: usize) -> String {
    let pad = " ".repeat(indent_unit);
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if let Some(tail) = rest.strip_prefix(' ') {
            out.push(' ');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('\t') {
            out.push_str(&pad);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(VERTICAL) {
            out.push_str(&pad);
            rest = eat_spaces(tail, indent_unit.saturating_sub(1));
        } else if let Some(tail) = rest
            .strip_prefix(BRANCH)
            .or_else(|| rest.strip_prefix(CORNER))
        {
            out.push_str(&pad);
            let tail = tail.trim_start_matches(FILL);
            rest = tail.strip_prefix(' ').unwrap_or(tail);
        } else {
            break;
        }
    }

    out.extend(
        rest.chars()
            .filter(|c| !matches!(*c, VERTICAL | BRANCH | CORNER | FILL)),
    );
    out
}

/// Consumes at most `max` leading spaces, the alignment belonging to one rail
/// column. Spaces beyond that are real indentation and must survive.
fn eat_spaces(s: &str, max: usize) -> &str {
    let mut rest = s;
    for _ in 0..max {
        match rest.strip_prefix(' ') {
            Some(tail) => rest = tail,
            None => break,
        }
    }
    rest
}

/// Parses a sketched tree description into entries.
///
/// Depth is `leading_spaces / indent_unit` on the glyph-normalized line;
/// irregular indentation rounds down rather than being rejected. Blank and
/// decoration-only lines are skipped. An entry more than one level deeper
/// than its parent allows is a [`SproutError::Parse`], and a sketch without
/// a single directory entry is a [`SproutError::NoRoot`].
pub fn parse_tree(text: &str, indent_unit: usize) -> Result<Vec<Entry>, SproutError> {
    if indent_unit == 0 {
        return Err(SproutError::Config(
            "indent unit must be a positive integer".into(),
        ));
    }

    let mut entries: Vec<Entry> = Vec::new();
    // How deep the next entry may nest: the stack length the planner will
    // have at this point of the traversal.
    let mut reach = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        let line = normalize_connectors(raw, indent_unit);
        let leading = line.chars().take_while(|c| *c == ' ').count();
        let depth = leading / indent_unit;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            // The line was pure decoration, e.g. a lone rail.
            continue;
        }

        if depth > reach {
            return Err(SproutError::parse(
                idx + 1,
                raw,
                format!(
                    "entry at depth {} has no parent directory at depth {}",
                    depth,
                    depth.saturating_sub(1)
                ),
            ));
        }

        let (name, kind) = match trimmed.strip_suffix('/') {
            Some(stripped) => (stripped.trim_end(), EntryKind::Directory),
            None => (trimmed, EntryKind::File),
        };

        if name.is_empty() {
            return Err(SproutError::parse(idx + 1, raw, "entry has no name"));
        }

        reach = match kind {
            EntryKind::Directory => depth + 1,
            EntryKind::File => depth,
        };

        entries.push(Entry {
            depth,
            name: name.to_string(),
            kind,
        });
    }

    if entries.is_empty() {
        return Err(SproutError::NoRoot);
    }
    if !entries.iter().any(Entry::is_directory) {
        return Err(SproutError::NoRoot);
    }

    Ok(entries)
}
