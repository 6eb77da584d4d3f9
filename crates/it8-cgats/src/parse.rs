//! CGATS text reader.
//!
//! # Format
//!
//! ```text
//! CTI3                                  <- sheet type (first token)
//!
//! DESCRIPTOR "Calibration Target chart information 3"
//! ORIGINATOR "cd-self-test"
//! NUMBER_OF_FIELDS 7
//! BEGIN_DATA_FORMAT
//! SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z
//! END_DATA_FORMAT
//! NUMBER_OF_SETS 1
//! BEGIN_DATA
//! 1 1 1 1 95 100 108.9
//! END_DATA
//! ```
//!
//! `#` starts a comment outside quoted strings. Trailing NUL bytes left by
//! C-string writers are ignored.

use crate::table::{Cell, Cgats, Property};
use crate::{CgatsError, CgatsResult};
use tracing::{debug, trace};

const BEGIN_DATA_FORMAT: &str = "BEGIN_DATA_FORMAT";
const END_DATA_FORMAT: &str = "END_DATA_FORMAT";
const BEGIN_DATA: &str = "BEGIN_DATA";
const END_DATA: &str = "END_DATA";
const KEYWORD: &str = "KEYWORD";

/// A whitespace-delimited token.
#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
}

/// Parses CGATS text from raw bytes.
pub fn parse(bytes: &[u8]) -> CgatsResult<Cgats> {
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    let text = std::str::from_utf8(&bytes[..end])?;

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| tokenize(line, i + 1).map(|tokens| (i + 1, tokens)))
        .filter(|res| !matches!(res, Ok((_, tokens)) if tokens.is_empty()));

    let mut table = Cgats {
        sheet_type: String::new(),
        properties: Vec::new(),
        formats: Vec::new(),
        rows: Vec::new(),
    };

    let mut first = true;
    while let Some(line) = lines.next() {
        let (line_no, tokens) = line?;
        let head = tokens[0].text.as_str();

        if first {
            first = false;
            if !tokens[0].quoted && !is_structural(head) {
                table.sheet_type = head.to_owned();
                debug!(sheet_type = head, "CGATS sheet type");
                continue;
            }
        }

        if tokens[0].quoted {
            return Err(CgatsError::parse(line_no, format!("expected keyword, found \"{head}\"")));
        }

        match head {
            BEGIN_DATA_FORMAT => {
                table.formats = read_formats(&mut lines, line_no)?;
                trace!(fields = table.formats.len(), "data format");
            }
            BEGIN_DATA => {
                table.rows = read_rows(&mut lines, line_no, table.formats.len())?;
                trace!(rows = table.rows.len(), "data block");
            }
            END_DATA | END_DATA_FORMAT => {
                return Err(CgatsError::parse(line_no, format!("unexpected {head}")));
            }
            KEYWORD => {
                // Custom keyword declarations carry no data of their own.
                trace!(line = line_no, "skipping KEYWORD declaration");
            }
            key => {
                let (value, quoted) = property_value(&tokens[1..]);
                match table.properties.iter_mut().find(|p| p.key == key) {
                    Some(p) => {
                        p.value = value;
                        p.quoted = quoted;
                    }
                    None => table.properties.push(Property {
                        key: key.to_owned(),
                        value,
                        quoted,
                    }),
                }
            }
        }
    }

    if first {
        return Err(CgatsError::Empty);
    }

    Ok(table)
}

fn is_structural(word: &str) -> bool {
    matches!(
        word,
        BEGIN_DATA_FORMAT | END_DATA_FORMAT | BEGIN_DATA | END_DATA | KEYWORD
    )
}

fn property_value(tokens: &[Token]) -> (String, bool) {
    match tokens {
        [] => (String::new(), false),
        [single] => (single.text.clone(), single.quoted),
        many => {
            let joined = many
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            (joined, false)
        }
    }
}

fn read_formats<I>(lines: &mut I, start: usize) -> CgatsResult<Vec<String>>
where
    I: Iterator<Item = CgatsResult<(usize, Vec<Token>)>>,
{
    let mut formats = Vec::new();
    for line in lines.by_ref() {
        let (_, tokens) = line?;
        for token in tokens {
            if !token.quoted && token.text == END_DATA_FORMAT {
                return Ok(formats);
            }
            formats.push(token.text);
        }
    }
    Err(CgatsError::parse(start, "BEGIN_DATA_FORMAT without END_DATA_FORMAT"))
}

fn read_rows<I>(lines: &mut I, start: usize, fields: usize) -> CgatsResult<Vec<Vec<Cell>>>
where
    I: Iterator<Item = CgatsResult<(usize, Vec<Token>)>>,
{
    let mut rows = Vec::new();
    for line in lines.by_ref() {
        let (line_no, tokens) = line?;
        if tokens.len() == 1 && !tokens[0].quoted && tokens[0].text == END_DATA {
            return Ok(rows);
        }
        if fields > 0 && tokens.len() != fields {
            return Err(CgatsError::parse(
                line_no,
                format!("expected {} fields, found {}", fields, tokens.len()),
            ));
        }
        let row = tokens
            .into_iter()
            .map(|t| match t.text.parse::<f64>() {
                Ok(v) if !t.quoted => Cell::Number(v),
                _ => Cell::Text(t.text),
            })
            .collect();
        rows.push(row);
    }
    Err(CgatsError::parse(start, "BEGIN_DATA without END_DATA"))
}

/// Splits one line into tokens, honoring `"` or `'` quotes and `#` comments.
fn tokenize(line: &str, line_no: usize) -> CgatsResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '#' {
            break;
        } else if c == '"' || c == '\'' {
            let quote = c;
            chars.next();
            let mut text = String::new();
            loop {
                match chars.next() {
                    Some(ch) if ch == quote => break,
                    Some(ch) => text.push(ch),
                    None => {
                        return Err(CgatsError::parse(line_no, "unterminated quoted string"));
                    }
                }
            }
            tokens.push(Token { text, quoted: true });
        } else {
            let mut text = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                text.push(ch);
                chars.next();
            }
            tokens.push(Token {
                text,
                quoted: false,
            });
        }
    }

    Ok(tokens)
}
