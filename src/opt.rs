use std::{fmt, fs, str::FromStr};

use crate::{bail, format_err, Result, Ty, Validator, Value};

/// One parsed option: its identifier plus the raw argument values in
/// positional order, each tagged with the declared argument name. When
/// parsing ran without a validator the names are empty and values are
/// addressable only by position.
///
/// File handles produced by [`ParsedOpt::open`] stay owned by the option
/// and are closed when it is dropped.
pub struct ParsedOpt {
    name: String,
    args: Vec<(String, String)>,
    handles: Vec<fs::File>,
}

impl ParsedOpt {
    pub(crate) fn build(validator: &Validator, name: &str, args: &[String]) -> ParsedOpt {
        let spec = validator.opt(name);
        let args = args
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let arg_name = spec
                    .and_then(|it| it.val_at(i))
                    .map(|it| it.name.clone())
                    .unwrap_or_default();
                (arg_name, value.clone())
            })
            .collect();
        ParsedOpt { name: name.to_string(), args, handles: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// The (argument name, raw value) pairs, in positional order.
    pub fn args(&self) -> impl Iterator<Item = (&str, &str)> {
        self.args.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The raw string stored for the named argument.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.args.iter().find(|(it, _)| it == name).map(|(_, value)| value.as_str())
    }

    /// The raw string stored at a position.
    pub fn raw_at(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|(_, value)| value.as_str())
    }

    /// Converts the named argument with the rule for `ty`. Extracting with
    /// the type the argument was validated against cannot fail after a
    /// successful parse; any other type simply re-runs that type's rule on
    /// the raw string.
    pub fn value(&self, name: &str, ty: Ty) -> Result<Value> {
        ty.eval(self.named(name)?)
    }

    /// Positional variant of [`ParsedOpt::value`].
    pub fn value_at(&self, index: usize, ty: Ty) -> Result<Value> {
        ty.eval(self.indexed(index)?)
    }

    /// `FromStr` shortcut for scalar arguments.
    pub fn get<T: FromStr>(&self, name: &str) -> Result<T>
    where
        T::Err: fmt::Display,
    {
        let raw = self.named(name)?;
        raw.parse::<T>().map_err(|err| format_err!("can't parse `{}`, {}", name, err))
    }

    /// Positional variant of [`ParsedOpt::get`].
    pub fn get_at<T: FromStr>(&self, index: usize) -> Result<T>
    where
        T::Err: fmt::Display,
    {
        let raw = self.indexed(index)?;
        raw.parse::<T>()
            .map_err(|err| format_err!("can't parse argument at index {}, {}", index, err))
    }

    /// Opens the named argument as a read-only file and returns a borrow of
    /// the handle. The option keeps ownership and releases the handle when
    /// it is dropped.
    pub fn open(&mut self, name: &str) -> Result<&fs::File> {
        let path = self.named(name)?.to_string();
        self.open_path(&path)
    }

    /// Positional variant of [`ParsedOpt::open`].
    pub fn open_at(&mut self, index: usize) -> Result<&fs::File> {
        let path = self.indexed(index)?.to_string();
        self.open_path(&path)
    }

    fn open_path(&mut self, path: &str) -> Result<&fs::File> {
        let file = match fs::File::open(path) {
            Ok(it) => it,
            Err(err) => bail!("can't open `{}`, {}", path, err),
        };
        self.handles.push(file);
        Ok(self.handles.last().unwrap())
    }

    fn named(&self, name: &str) -> Result<&str> {
        self.raw(name).ok_or_else(|| format_err!("Argument \"{}\" does not exist.", name))
    }

    fn indexed(&self, index: usize) -> Result<&str> {
        self.raw_at(index)
            .ok_or_else(|| format_err!("Argument at index {} does not exist.", index))
    }
}

impl fmt::Debug for ParsedOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedOpt").field("name", &self.name).field("args", &self.args).finish()
    }
}
