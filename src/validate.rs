use crate::{bail, OptSpec, Result};

/// The set of declared options, plus the logic checking one raw option
/// group against its declaration.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    opts: Vec<OptSpec>,
}

impl Validator {
    pub fn new() -> Validator {
        Validator::default()
    }

    /// Registers `spec`. Re-adding an identifier replaces the earlier spec
    /// in place; declaration order is otherwise preserved and drives the
    /// required-option check.
    pub fn add_opt(&mut self, spec: OptSpec) {
        match self.opts.iter_mut().find(|it| it.name() == spec.name()) {
            Some(slot) => *slot = spec,
            None => self.opts.push(spec),
        }
    }

    pub fn opt(&self, name: &str) -> Option<&OptSpec> {
        self.opts.iter().find(|it| it.name() == name)
    }

    pub fn opt_count(&self) -> usize {
        self.opts.len()
    }

    pub fn opts(&self) -> &[OptSpec] {
        &self.opts
    }

    /// Checks one option group: the option must be declared, the argument
    /// count must match the declaration, and every argument must satisfy
    /// its declared type, in declared order. Stops at the first failure.
    pub fn validate(&self, name: &str, args: &[String]) -> Result<()> {
        let spec = match self.opt(name) {
            Some(it) => it,
            None => bail!("Invalid option \"{}\".", name),
        };
        if spec.arg_count() != args.len() {
            bail!(
                "Invalid argument count for option \"{}\". Expected: {}. Got {}.",
                name,
                spec.arg_count(),
                args.len()
            )
        }
        for (i, arg) in args.iter().enumerate() {
            match spec.ty_at(i) {
                Some(ty) => ty.check(arg)?,
                None => bail!("Argument at index {} does not exist.", i),
            }
        }
        Ok(())
    }
}
