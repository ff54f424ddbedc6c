//! Line-oriented interactive console.

use std::fmt::Display;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompts on an output stream and reads answers line by line.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Reads one line without its line terminator.
    ///
    /// Returns `None` once the input is closed.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes `message` without a newline and reads the trimmed answer.
    pub async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(self.read_line().await?.map(|answer| answer.trim().to_string()))
    }

    /// Reads lines until one equals `sentinel` or the input closes.
    ///
    /// The sentinel line itself is not returned.
    pub async fn read_until(&mut self, sentinel: &str) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line().await? {
            if line == sentinel {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }
}
