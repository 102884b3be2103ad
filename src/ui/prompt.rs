use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// A yes/no answer, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Other(String),
}

impl Answer {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Other(trimmed.to_string()),
        }
    }
}

/// Line-oriented dialog over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `question`, then read one line. End of input is reported as
    /// `UnexpectedEof` so callers never spin on an exhausted stream.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<Answer> {
        self.ask(question).map(|raw| Answer::parse(&raw))
    }

    /// Print a line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether an error chain bottoms out in closed input.
pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_parse() {
        assert_eq!(Answer::parse("YES"), Answer::Yes);
        assert_eq!(Answer::parse(" no \n"), Answer::No);
        assert_eq!(Answer::parse("maybe"), Answer::Other("maybe".to_string()));
        assert_eq!(Answer::parse("y"), Answer::Other("y".to_string()));
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut prompter = Prompter::new("chicago\r\nmay\n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask("City? ").unwrap(), "chicago");
        assert_eq!(prompter.ask("Month? ").unwrap(), "may");
        let err = prompter.ask("Day? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "City? Month? Day? ");
    }

    #[test]
    fn test_is_end_of_input() {
        let eof = anyhow::Error::new(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
            .context("asking");
        assert!(is_end_of_input(&eof));
        assert!(!is_end_of_input(&anyhow::anyhow!("other")));
    }
}
