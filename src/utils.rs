//! Some utility functions for interactive front-ends

use std::io::{self, BufRead, Write};

/// Print `question`, and return the line typed by the user (trimmed).
/// Returns `None` when the input is closed
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<Option<String>> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question (i.e. a checkbox). Anything but `y`/`yes` is a no
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    let answer = prompt(input, output, &format!("{} [y/N] ", question))?;
    Ok(match answer {
        None => false,
        Some(a) => a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"),
    })
}

/// Print a numbered list of choices (i.e. a radio button or a select box)
pub fn print_choices<W: Write, S: AsRef<str>>(output: &mut W, title: &str, choices: &[S]) -> io::Result<()> {
    writeln!(output, "{}", title)?;
    for (i, choice) in choices.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, choice.as_ref())?;
    }
    Ok(())
}

/// Wait for the user to press enter
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    prompt(input, output, "Press Enter to continue...")?;
    Ok(())
}
