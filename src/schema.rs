use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{bail, Result};

/// The type of one declared argument. Each type carries exactly one
/// validation rule, applied to a single raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    /// Non-empty, and the first char falls in the printable ASCII range.
    Char,
    /// Base-10 integer in `[0, 255]`.
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Always valid.
    String,
    /// The token names an existing regular file.
    File,
    /// The token names an existing directory.
    Dir,
}

/// A value converted out of a validated raw token, one variant per [`Ty`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Char(char),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Str(String),
    File(PathBuf),
    Dir(PathBuf),
}

impl Ty {
    /// Runs this type's rule against `raw` and converts on success.
    /// Validation and extraction share this dispatch, so a token that
    /// validated converts identically later.
    pub fn eval(self, raw: &str) -> Result<Value> {
        match self {
            Ty::Char => match raw.chars().next() {
                Some(c) if (32..=127).contains(&(c as u32)) => Ok(Value::Char(c)),
                _ => bail!("Argument \"{}\" is not of type 'char'.", raw),
            },
            Ty::U8 => match raw.parse::<i64>() {
                Ok(byte @ 0..=255) => Ok(Value::U8(byte as u8)),
                _ => bail!("Argument \"{}\" is not of type 'unsigned char'.", raw),
            },
            Ty::I16 => int(raw, Value::I16, "short"),
            Ty::U16 => int(raw, Value::U16, "unsigned short"),
            Ty::I32 => int(raw, Value::I32, "int"),
            Ty::U32 => int(raw, Value::U32, "unsigned int"),
            Ty::I64 => int(raw, Value::I64, "long long"),
            Ty::U64 => int(raw, Value::U64, "unsigned long long"),
            Ty::String => Ok(Value::Str(raw.to_string())),
            Ty::File => {
                if !Path::new(raw).is_file() {
                    bail!("File at \"{}\" does not exist.", raw)
                }
                Ok(Value::File(PathBuf::from(raw)))
            }
            Ty::Dir => {
                if !Path::new(raw).is_dir() {
                    bail!("Directory at \"{}\" does not exist.", raw)
                }
                Ok(Value::Dir(PathBuf::from(raw)))
            }
        }
    }

    pub(crate) fn check(self, raw: &str) -> Result<()> {
        self.eval(raw).map(drop)
    }
}

fn int<T: FromStr>(raw: &str, wrap: fn(T) -> Value, c_name: &str) -> Result<Value> {
    match raw.parse::<T>() {
        Ok(it) => Ok(wrap(it)),
        Err(_) => bail!("Argument \"{}\" is not of type '{}'.", raw, c_name),
    }
}

/// One declared argument: its name and type.
#[derive(Debug, Clone)]
pub struct Val {
    pub name: String,
    pub ty: Ty,
}

/// The declared shape of one option: identifier, ordered arguments, and
/// whether the option may be omitted. Declaration order of arguments is
/// positional order.
#[derive(Debug, Clone)]
pub struct OptSpec {
    name: String,
    vals: Vec<Val>,
    optional: bool,
}

impl OptSpec {
    pub fn new(name: &str) -> OptSpec {
        OptSpec { name: name.to_string(), vals: Vec::new(), optional: false }
    }

    /// Declares the next positional argument. Re-declaring a name replaces
    /// its type, keeping the original position.
    pub fn arg(mut self, name: &str, ty: Ty) -> OptSpec {
        match self.vals.iter_mut().find(|it| it.name == name) {
            Some(slot) => slot.ty = ty,
            None => self.vals.push(Val { name: name.to_string(), ty }),
        }
        self
    }

    /// Marks the option as safe to omit. Options are required by default.
    pub fn optional(mut self) -> OptSpec {
        self.optional = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn arg_count(&self) -> usize {
        self.vals.len()
    }

    pub fn val_at(&self, index: usize) -> Option<&Val> {
        self.vals.get(index)
    }

    pub fn val(&self, name: &str) -> Option<&Val> {
        self.vals.iter().find(|it| it.name == name)
    }

    pub fn ty_at(&self, index: usize) -> Option<Ty> {
        self.val_at(index).map(|it| it.ty)
    }

    pub fn ty_of(&self, name: &str) -> Option<Ty> {
        self.val(name).map(|it| it.ty)
    }
}
