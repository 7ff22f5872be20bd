use core::fmt;
use std::io::{self, BufRead, IsTerminal};

pub struct WriteAdapter<W>(pub W);

impl<W> fmt::Write for WriteAdapter<W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.0.write_fmt(args).map_err(|_| fmt::Error)
    }
}

pub trait StdIn: Send + Sync {
    fn is_terminal(&self) -> bool;
    fn lines(&self) -> impl Iterator<Item = io::Result<String>>;

    /// Read everything piped in, one line per line.
    ///
    /// # Errors
    ///
    /// If reading a line fails.
    fn read_to_string(&self) -> io::Result<String> {
        self.lines().try_fold(String::new(), |mut acc, line| {
            acc.push_str(&line?);
            acc.push('\n');
            Ok(acc)
        })
    }
}

impl StdIn for io::Stdin {
    fn is_terminal(&self) -> bool {
        self.lock().is_terminal()
    }
    fn lines(&self) -> impl Iterator<Item = io::Result<String>> {
        io::BufReader::new(self.lock()).lines()
    }
}
