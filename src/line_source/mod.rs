use std::io::{BufRead, Error, ErrorKind};

/// Something that hands out one line of text per call.
///
/// Implementations block until a line is available or fail with an
/// `std::io::Error` when the link is gone or a timeout elapsed. Timeouts
/// are configured on the underlying resource, never here.
pub trait LineSource {
    /// Reads the next line, without interpreting its content.
    fn read_line(&mut self) -> Result<String, Error>;
}

/// Adapter turning any buffered reader (tty, capture file, stdin) into a
/// [`LineSource`].
pub struct LineReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line)?;

        /* A reader that ran dry will never deliver a footer */
        if read == 0 {
            return Err(Error::new(ErrorKind::UnexpectedEof, "line source closed"));
        }

        Ok(line)
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> Result<String, Error> {
        (**self).read_line()
    }
}
