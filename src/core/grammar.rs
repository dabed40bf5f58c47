//! Compiler for the field definition language.
//!
//! A field definition is a whitespace separated sequence of tokens:
//! - `` `text` `` a literal, `` \` `` inside it stands for a backtick
//! - `$N` the Nth capture group of the matching name pattern
//! - `file-name` the entry name
//! - `last-change` or `last-change:<format>` the modification time
//!
//! Backticks and dollar signs also end the token before them, so `` file-name`/` `` is two tokens.
//! [Field::compile] turns one definition into a [Field], a non-empty list of [Instruction]s.

use crate::core::error::SyntaxError;

const KEY_FILE_NAME: &str = "file-name";
const KEY_LAST_CHANGE: &str = "last-change";

/// A single compiled step of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Constant text.
    Literal(String),
    /// The raw entry name.
    EntryName,
    /// Modification time, with an optional chrono format string.
    LastModified(Option<String>),
    /// Capture group of the matching pattern. 0 is the whole match.
    CaptureRef(usize),
}

/// One compiled column definition.
///
/// Never empty: a definition without tokens fails to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    instructions: Box<[Instruction]>,
}

impl Field {
    /// Compiles a raw definition string.
    ///
    /// # Returns
    /// The compiled field or the first [SyntaxError] found while scanning left to right.
    pub fn compile(definition: &str) -> Result<Self, SyntaxError> {
        let chars: Vec<char> = definition.chars().collect();
        let mut out = Vec::new();
        let mut i = 0usize;

        while i < chars.len() {
            let ch = chars[i];
            if ch.is_whitespace() {
                i += 1;
                continue;
            }

            let (instruction, next) = match ch {
                '`' => scan_literal(&chars, i)?,
                '$' => scan_capture(&chars, i)?,
                _ => scan_param(&chars, i)?,
            };
            out.push(instruction);
            i = next;
        }

        if out.is_empty() {
            return Err(SyntaxError::EmptyDefinition);
        }
        Ok(Field {
            instructions: out.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '`' || c == '$'
}

/// Reads from `start` up to the next delimiter.
fn scan_word(chars: &[char], start: usize) -> (String, usize) {
    let mut word = String::new();
    let mut j = start;
    while j < chars.len() && !is_delimiter(chars[j]) {
        word.push(chars[j]);
        j += 1;
    }
    (word, j)
}

fn scan_literal(chars: &[char], start: usize) -> Result<(Instruction, usize), SyntaxError> {
    let mut value = String::new();
    let mut j = start + 1;
    while j < chars.len() {
        match chars[j] {
            '\\' if chars.get(j + 1) == Some(&'`') => {
                value.push('`');
                j += 2;
            }
            '`' => return Ok((Instruction::Literal(value), j + 1)),
            c => {
                value.push(c);
                j += 1;
            }
        }
    }
    Err(SyntaxError::UnterminatedLiteral { column: start + 1 })
}

fn scan_capture(chars: &[char], start: usize) -> Result<(Instruction, usize), SyntaxError> {
    let (text, next) = scan_word(chars, start + 1);

    // usize::from_str accepts a leading '+', the grammar does not.
    let index = if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse::<usize>().ok()
    } else {
        None
    };

    match index {
        Some(index) => Ok((Instruction::CaptureRef(index), next)),
        None => Err(SyntaxError::InvalidCaptureIndex {
            text,
            column: start + 1,
        }),
    }
}

fn scan_param(chars: &[char], start: usize) -> Result<(Instruction, usize), SyntaxError> {
    let (word, next) = scan_word(chars, start);
    let (key, arg) = match word.split_once(':') {
        Some((key, arg)) => (key, Some(arg)),
        None => (word.as_str(), None),
    };

    let instruction = match key {
        KEY_FILE_NAME => Instruction::EntryName,
        KEY_LAST_CHANGE => {
            Instruction::LastModified(arg.filter(|a| !a.is_empty()).map(str::to_string))
        }
        _ => {
            return Err(SyntaxError::UnknownKey {
                key: key.to_string(),
                column: start + 1,
            });
        }
    };
    Ok((instruction, next))
}
