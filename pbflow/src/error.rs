use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Empty,
    Length(usize),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Empty     => write!(f, "ip family not set"),
            Error::Length(n) => write!(f, "invalid ipv6 length {}", n),
        }
    }
}
