//! Console front end
//!
//! Reads replies line by line and prints narration as plain text.

use std::io::{self, BufRead, Write};

use super::{Input, Output, Reply};
use crate::game::MessageCategory;

/// Line-based input over any buffered reader (stdin in the game binary)
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line reaches the engine as an answer it will not accept.
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Input for ConsoleInput<R> {
    fn read_reply(&mut self) -> io::Result<Reply> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Reply::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Reply::Line(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Plain-text output to any writer (stdout in the game binary)
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn emit(&mut self, category: MessageCategory, text: &str) {
        // Room descriptions get a blank line in front, like a new paragraph
        let result = if category == MessageCategory::Lore {
            writeln!(self.writer, "\n{}", text)
        } else {
            writeln!(self.writer, "{}", text)
        };
        if let Err(e) = result.and_then(|_| self.writer.flush()) {
            log::error!("failed to write output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_then_closes() {
        let mut input = ConsoleInput::new(Cursor::new("yes\r\n 2 \n"));
        assert_eq!(input.read_reply().unwrap(), Reply::Line("yes".to_string()));
        assert_eq!(input.read_reply().unwrap(), Reply::Line(" 2 ".to_string()));
        assert_eq!(input.read_reply().unwrap(), Reply::Closed);
    }

    #[test]
    fn test_invalid_utf8_is_a_line() {
        let mut input = ConsoleInput::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'n', b'\n']));
        assert_eq!(
            input.read_reply().unwrap(),
            Reply::Line("\u{fffd}\u{fffd}".to_string())
        );
        assert_eq!(input.read_reply().unwrap(), Reply::Line("n".to_string()));
        assert_eq!(input.read_reply().unwrap(), Reply::Closed);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = ConsoleInput::new(Cursor::new("1"));
        assert_eq!(input.read_reply().unwrap(), Reply::Line("1".to_string()));
        assert_eq!(input.read_reply().unwrap(), Reply::Closed);
    }

    #[test]
    fn test_output_lines() {
        let mut out = ConsoleOutput::new(Vec::new());
        out.emit(MessageCategory::Lore, "A dark room.");
        out.emit(MessageCategory::System, "Available doors:");
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "\nA dark room.\nAvailable doors:\n");
    }
}
