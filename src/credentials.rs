//! Password input for protection mode changes
//!
//! Passwords are raw bytes. The drive compares them byte for byte, so no
//! text encoding is assumed anywhere on this path.

use crate::error::Result;
use crate::scsi::constants::protection::MAX_PASSWORD_LEN;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of the password sent with a protection mode change
pub trait CredentialProvider {
    fn password(&mut self) -> Result<Vec<u8>>;
}

/// Writes `Password: ` to `output` and reads one line from `input`.
///
/// The default instance talks to the terminal. Input is echoed.
#[derive(Debug)]
pub struct TerminalPrompt<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CredentialProvider for TerminalPrompt<R, W> {
    fn password(&mut self) -> Result<Vec<u8>> {
        write!(self.output, "Password: ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        Ok(normalize_password(&line))
    }
}

/// Strip one trailing newline and keep at most 32 bytes.
pub fn normalize_password(line: &[u8]) -> Vec<u8> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line[..line.len().min(MAX_PASSWORD_LEN)].to_vec()
}

/// Hands out pre-set answers in order; records how often it was asked.
#[derive(Debug, Default)]
pub struct ScriptedCredentials {
    answers: Vec<Vec<u8>>,
    pub prompts: usize,
}

impl ScriptedCredentials {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut answers: Vec<Vec<u8>> = answers
            .into_iter()
            .map(|answer| answer.as_ref().to_vec())
            .collect();
        answers.reverse();
        Self {
            answers,
            prompts: 0,
        }
    }
}

impl CredentialProvider for ScriptedCredentials {
    fn password(&mut self) -> Result<Vec<u8>> {
        self.prompts += 1;
        Ok(self
            .answers
            .pop()
            .map(|answer| normalize_password(&answer))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &[u8]) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_newline_stripped() {
        assert_eq!(normalize_password(b"secret\n"), b"secret");
        assert_eq!(normalize_password(b"secret"), b"secret");
        assert_eq!(normalize_password(b"\n"), b"");
        assert_eq!(normalize_password(b""), b"");
    }

    #[test]
    fn test_only_one_newline_stripped() {
        assert_eq!(normalize_password(b"pw\r\n"), b"pw\r");
        assert_eq!(normalize_password(b"pw\n\n"), b"pw\n");
    }

    #[test]
    fn test_truncated_to_32_bytes() {
        assert_eq!(normalize_password(&[b'a'; 40]).len(), 32);
        let mut line = vec![b'b'; 32];
        line.push(b'\n');
        assert_eq!(normalize_password(&line), vec![b'b'; 32]);
    }

    #[test]
    fn test_truncation_cuts_inside_multibyte_char() {
        let line = format!("{}é", "a".repeat(31));
        let password = normalize_password(line.as_bytes());
        assert_eq!(password.len(), 32);
        assert_eq!(&password[..31], "a".repeat(31).as_bytes());
        assert_eq!(password[31], 0xC3);
    }

    #[test]
    fn test_non_utf8_bytes_kept() {
        assert_eq!(normalize_password(b"caf\xe9\n"), b"caf\xe9");
    }

    #[test]
    fn test_prompt_written_without_newline() {
        let mut terminal = prompt(b"secret\n");
        assert_eq!(terminal.password().unwrap(), b"secret");
        assert_eq!(terminal.into_output(), b"Password: ");
    }

    #[test]
    fn test_prompt_reads_single_line() {
        let mut terminal = prompt(b"first\nsecond\n");
        assert_eq!(terminal.password().unwrap(), b"first");
        assert_eq!(terminal.password().unwrap(), b"second");
        assert_eq!(terminal.into_output(), b"Password: Password: ");
    }

    #[test]
    fn test_prompt_eof_gives_empty_password() {
        let mut terminal = prompt(b"");
        assert!(terminal.password().unwrap().is_empty());
        assert_eq!(terminal.into_output(), b"Password: ");
    }

    #[test]
    fn test_prompt_keeps_latin1_input() {
        let mut terminal = prompt(b"caf\xe9\n");
        assert_eq!(terminal.password().unwrap(), b"caf\xe9");
    }

    #[test]
    fn test_scripted_answers_in_order() {
        let mut creds = ScriptedCredentials::new(["one\n", "two"]);
        assert_eq!(creds.password().unwrap(), b"one");
        assert_eq!(creds.password().unwrap(), b"two");
        assert!(creds.password().unwrap().is_empty());
        assert_eq!(creds.prompts, 3);
    }
}
