use std::fs::File;
use std::io::{self, Read};
use std::str::FromStr;
use anyhow::Result;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    Pb,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "pb"   => Ok(Format::Pb),
            _      => Err(format!("invalid format: {}", s)),
        }
    }
}

pub fn opt<T: FromStr>(arg: Option<&str>) -> Result<Option<T>> {
    Ok(arg.map(|s| T::from_str(s).map_err(|_| {
        let msg  = format!("invalid argument value '{}'", s);
        let kind = clap::ErrorKind::InvalidValue;
        clap::Error::with_description(&msg, kind)
    })).transpose()?)
}

pub fn input(path: &str) -> Result<Box<dyn Read + Send>> {
    Ok(match path {
        "-"  => Box::new(io::stdin()),
        path => Box::new(File::open(path).map_err(|e| {
            let msg  = format!("invalid argument '{}': {}", path, e);
            let kind = clap::ErrorKind::InvalidValue;
            clap::Error::with_description(&msg, kind)
        })?),
    })
}
