//! Interactive input module
//!
//! Prints a prompt line and reads one trimmed line of input.
//! Generic over the reader/writer so unit tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{PostdraftError, Result};

/// Print `prompt` on its own line, then read and trim one line of input.
///
/// End-of-input before a line is available is a fatal error; no
/// retries.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(PostdraftError::Prompt(format!(
            "unexpected end of input while waiting for: {}",
            prompt
        )));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_input() {
        let mut input = Cursor::new(b"  My Title  \n".to_vec());
        let mut output = Vec::new();

        let answer = ask(&mut input, &mut output, "Tell me the title of your post").unwrap();
        assert_eq!(answer, "My Title");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Tell me the title of your post\n"
        );
    }

    #[test]
    fn test_ask_accepts_empty_line() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let answer = ask(&mut input, &mut output, "Post categories?").unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn test_ask_eof_is_fatal() {
        let mut input = Cursor::new(Vec::<u8>::new());
        let mut output = Vec::new();

        let err = ask(&mut input, &mut output, "Post categories?").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut input = Cursor::new(b"first\nsecond\n".to_vec());
        let mut output = Vec::new();

        assert_eq!(ask(&mut input, &mut output, "a").unwrap(), "first");
        assert_eq!(ask(&mut input, &mut output, "b").unwrap(), "second");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut input = Cursor::new(b"no newline".to_vec());
        let mut output = Vec::new();

        assert_eq!(ask(&mut input, &mut output, "a").unwrap(), "no newline");
    }
}
