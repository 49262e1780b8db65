use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    Eof,
    Short { read: usize, size: usize },
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _            => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Eof                  => write!(f, "end of input"),
            Error::Short { read, size } => write!(f, "short record: {} of {} bytes", read, size),
            Error::Io(e)                => write!(f, "read failed: {}", e),
        }
    }
}
