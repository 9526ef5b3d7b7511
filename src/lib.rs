//! A command line arguments parser driven by a runtime schema: declare each
//! option's arguments and their types in a [`Validator`], point a [`Parser`]
//! at the process arguments, and read typed values back per option.

use std::fmt;

pub use crate::{
    opt::ParsedOpt,
    parse::{Outcome, Parser},
    schema::{OptSpec, Ty, Val, Value},
    validate::Validator,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub struct Error {
    msg: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.msg, f)
    }
}

macro_rules! format_err {
    ($($tt:tt)*) => {
        crate::Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(crate::format_err!($($tt)*))
    };
}

pub(crate) use bail;
pub(crate) use format_err;

mod opt;
mod parse;
mod schema;
mod validate;
