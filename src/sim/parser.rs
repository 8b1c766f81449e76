//! Meta-Data Parser.
//!
//! Turns meta-data text into an ordered program. The language is a list of
//! `component(name)cycles` instructions separated by `;` and closed by `.`,
//! optionally wrapped in header and footer marker lines:
//!
//! ```text
//! Start Program Meta-Data Code:
//! S(start)0; A(start)0; P(run)11; I(hard drive)2;
//! O(monitor)5; A(end)0; S(end)0.
//! End Program Meta-Data Code.
//! ```
//!
//! Whitespace between instructions, including line breaks, is insignificant.
//! Component letters and names are not validated here; the engine decides
//! what they mean.

use crate::common::constants::{META_DATA_FOOTER, META_DATA_HEADER};
use crate::common::{Component, Operation, ParseError};

/// Operations in the order they appear in the meta-data text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaDataProgram {
    operations: Vec<Operation>,
}

impl MetaDataProgram {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of terminated instructions.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

/// A character with its 1-based line and column.
type Positioned = (char, usize, usize);

fn is_marker(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(META_DATA_HEADER) || line.starts_with(META_DATA_FOOTER)
}

/// Yields every character outside the marker lines, one `\n` per line.
fn positioned_chars(text: &str) -> impl Iterator<Item = Positioned> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !is_marker(line))
        .flat_map(|(index, line)| {
            line.chars()
                .chain(std::iter::once('\n'))
                .enumerate()
                .map(move |(column, c)| (c, index + 1, column + 1))
        })
}

/// How an instruction's cycle count was closed.
enum Terminator {
    /// `;`, more instructions may follow.
    Separator,
    /// `.`, the program ends.
    End,
}

/// Parses meta-data text into a program.
///
/// Parsing stops at the first `.`; anything after it is ignored. Text with
/// no instructions yields an empty program.
///
/// # Errors
///
/// Returns a [`ParseError`] when an instruction cannot be extracted: a
/// missing `(`, a name without `)`, a non-digit or a whitespace-split run
/// of digits in a cycle count, a count that overflows `u64`, or an
/// instruction cut off before its terminator.
pub fn parse(text: &str) -> Result<MetaDataProgram, ParseError> {
    let mut chars = positioned_chars(text);
    let mut operations = Vec::new();

    while let Some((c, line, column)) = chars.next() {
        match c {
            c if c.is_whitespace() => continue,
            ';' => continue,
            '.' => break,
            _ => {}
        }

        let (operation, terminator) = parse_instruction(&mut chars, c, line, column)?;
        operations.push(operation);
        if let Terminator::End = terminator {
            break;
        }
    }

    tracing::debug!(count = operations.len(), "parsed meta-data");
    Ok(MetaDataProgram::new(operations))
}

fn parse_instruction<I>(
    chars: &mut I,
    component: char,
    line: usize,
    column: usize,
) -> Result<(Operation, Terminator), ParseError>
where
    I: Iterator<Item = Positioned>,
{
    let (paren_line, paren_column) = match chars.next() {
        Some(('(', l, c)) => (l, c),
        _ => {
            return Err(ParseError::MissingOpenParen {
                component,
                line,
                column,
            })
        }
    };

    let mut name = String::new();
    loop {
        match chars.next() {
            Some((')', _, _)) => break,
            Some((c, _, _)) => name.push(c),
            None => {
                return Err(ParseError::UnterminatedName {
                    line: paren_line,
                    column: paren_column,
                })
            }
        }
    }

    let mut cycle_count: u64 = 0;
    let mut seen_digit = false;
    let mut digits_closed = false;
    let terminator = loop {
        match chars.next() {
            Some((';', _, _)) => break Terminator::Separator,
            Some(('.', _, _)) => break Terminator::End,
            Some((c, l, col)) if c.is_ascii_digit() => {
                // Digits must be consecutive: `1 2` is not a count.
                if digits_closed {
                    return Err(ParseError::InvalidCycleCount {
                        found: c,
                        line: l,
                        column: col,
                    });
                }
                seen_digit = true;
                let digit = u64::from(c as u8 - b'0');
                cycle_count = cycle_count
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(digit))
                    .ok_or(ParseError::CycleCountOverflow { line: l, column: col })?;
            }
            Some((c, _, _)) if c.is_whitespace() => digits_closed = seen_digit,
            Some((found, l, col)) => {
                return Err(ParseError::InvalidCycleCount {
                    found,
                    line: l,
                    column: col,
                })
            }
            None => return Err(ParseError::UnterminatedInstruction { line, column }),
        }
    };

    let operation = Operation::new(Component::from_code(component), name, cycle_count);
    Ok((operation, terminator))
}
