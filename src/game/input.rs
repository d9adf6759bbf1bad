//! Line-oriented guess input

use std::io::{self, BufRead};

/// Source of player input, one line at a time
pub trait LineSource {
    /// Read the next line without its line terminator
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A final line with no
    /// trailing newline is still returned. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD so they fail guess validation instead of ending the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
