//! Reflow of a classified block-op stream into markdown.
//!
//! A single fold over [`BlockOp`]s carrying two accumulator slots: the
//! main chunk buffer and the sidebar side-channel. Sidebar content is
//! buffered until the stream transitions to a non-sidebar block, then
//! flushed as a blockquote ahead of that block's opener.

use log::warn;

use super::classify::{BlockOp, Role};

/// Fold state for one emission pass.
struct ReflowState {
    /// Role of the most recently opened block; Spacer before any
    mode: Role,
    /// Main output buffer
    chunks: Vec<String>,
    /// Sidebar side-channel buffer
    sidebar: Vec<String>,
}

/// Stitch a classified op stream into a single markdown string.
///
/// Block boundaries open role-specific prefixes (`\n\n# `, `\n\n## `,
/// `\n\n`); sidebar content accumulates in a side buffer and is emitted
/// as a blockquote when the stream leaves sidebar mode. When the stream
/// ends inside an open sidebar block the buffer is dropped unless
/// `flush_trailing_sidebar` is set.
pub fn reflow<I>(ops: I, flush_trailing_sidebar: bool) -> String
where
    I: IntoIterator<Item = BlockOp>,
{
    let mut state = ReflowState {
        mode: Role::Spacer,
        chunks: Vec::new(),
        sidebar: Vec::new(),
    };

    for op in ops {
        let previous_mode = state.mode;
        let mut pending: Vec<String> = Vec::new();

        // A spacer never opens a block; leaving sidebar mode forces a
        // boundary even mid-block.
        let starts_block = op.role != Role::Spacer
            && (!op.continuation || (previous_mode == Role::Sidebar && op.role != Role::Sidebar));

        if starts_block {
            state.mode = op.role;
            match op.role {
                Role::Heading1 => pending.push("\n\n# ".to_string()),
                Role::Heading2 => pending.push("\n\n## ".to_string()),
                Role::Paragraph => pending.push("\n\n".to_string()),
                Role::Sidebar => state.sidebar.push("\n\n".to_string()),
                Role::Spacer => {}
            }
        } else if op.role == Role::Sidebar && !state.sidebar.is_empty() {
            if needs_space(state.sidebar.last().map_or("", String::as_str)) {
                state.sidebar.push(" ".to_string());
            }
        } else if let Some(last) = state.chunks.last() {
            if needs_space(last) {
                pending.push(" ".to_string());
            }
        }

        if !op.text.is_empty() {
            // A continuing sidebar op with nothing buffered falls back to
            // the main flow.
            if op.role == Role::Sidebar && (!state.sidebar.is_empty() || starts_block) {
                state.sidebar.push(op.text);
            } else {
                pending.push(op.text);
            }
        }

        if starts_block && op.role != Role::Sidebar && !state.sidebar.is_empty() {
            let quote = blockquote(&state.sidebar.concat());
            pending.insert(0, quote);
            pending.insert(0, "\n\n".to_string());
            state.sidebar.clear();
        }

        // Runs of spacers collapse to at most one separator token.
        if op.role == Role::Spacer {
            pending.truncate(1);
        }

        state.chunks.append(&mut pending);
    }

    if !state.sidebar.is_empty() {
        if flush_trailing_sidebar {
            let quote = blockquote(&state.sidebar.concat());
            if !quote.is_empty() {
                state.chunks.push("\n\n".to_string());
                state.chunks.push(quote);
            }
        } else {
            warn!(
                "dropping unflushed sidebar content at end of stream ({} chars)",
                state.sidebar.iter().map(String::len).sum::<usize>()
            );
        }
    }

    if let Some(first) = state.chunks.first_mut() {
        *first = first.trim_start().to_string();
    }

    state.chunks.concat()
}

/// Whether a space must be inserted after `last` before appending more
/// text: suppressed after trailing whitespace, a hyphen, or a
/// single-character chunk (initials, ligature artifacts).
fn needs_space(last: &str) -> bool {
    if last.chars().count() == 1 {
        return false;
    }
    !last
        .chars()
        .last()
        .is_some_and(|c| c.is_whitespace() || c == '-')
}

/// Render buffered sidebar text as a blockquote: split on line breaks,
/// trim each line, drop blanks, prefix with `> `.
fn blockquote(raw: &str) -> String {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
