// XML Fragment Inclusion
// Copies a previously saved XML file into a larger document

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::constants::MAX_INDENT;
use crate::error::SaveError;

const XML_DECLARATION: &[u8] = b"<?xml ";
const DOCTYPE: &[u8] = b"<!DOCTYPE ";

/// Copy `file` into `writer`, indenting every line by `indent` spaces.
///
/// Leading XML declaration and doctype lines are skipped. Indent is capped
/// at `MAX_INDENT`. Line content is copied byte for byte and every line is
/// written with a `\n` terminator.
pub fn add_xml_file_to_writer<W: Write + ?Sized>(
    writer: &mut W,
    file: &Path,
    indent: usize,
) -> Result<(), SaveError> {
    let padding = " ".repeat(indent.min(MAX_INDENT));

    let input = File::open(file).map_err(|source| SaveError::Open {
        path: file.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(input);

    let mut line = Vec::new();
    let mut in_prolog = true;
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|source| SaveError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }

        let content = trim_line_ending(&line);
        if in_prolog && (content.starts_with(XML_DECLARATION) || content.starts_with(DOCTYPE)) {
            continue;
        }
        in_prolog = false;

        writer
            .write_all(padding.as_bytes())
            .and_then(|_| writer.write_all(content))
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(SaveError::Write)?;
    }

    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
