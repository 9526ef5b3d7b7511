use std::{collections::BTreeMap, mem};

use crate::{bail, opt::ParsedOpt, Result, Validator};

/// The non-failure outcomes of [`Parser::parse`]. Failure is the `Err` leg
/// of the returned `Result` and carries the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HelpRequested,
}

/// Scans the raw argument vector into option groups, validates each group
/// against the configured [`Validator`], and keeps the table of parsed
/// options for the caller to query.
pub struct Parser {
    first_arg: String,
    args: Vec<String>,
    indicator: String,
    validator: Validator,
    opts: BTreeMap<String, ParsedOpt>,
}

impl Parser {
    /// Builds a parser from a full argument vector. The first element is
    /// the program name: it is stored, never scanned, and available via
    /// [`Parser::first_arg`].
    pub fn new(mut args: Vec<String>) -> Parser {
        let first_arg = if args.is_empty() { String::new() } else { args.remove(0) };
        Parser {
            first_arg,
            args,
            indicator: "-".to_string(),
            validator: Validator::new(),
            opts: BTreeMap::new(),
        }
    }

    /// Builds a parser from the process arguments. Non-UTF-8 arguments are
    /// converted lossily; every rule downstream is defined on strings.
    pub fn from_env() -> Parser {
        let args = std::env::args_os().map(|it| it.to_string_lossy().into_owned()).collect();
        Parser::new(args)
    }

    pub fn first_arg(&self) -> &str {
        &self.first_arg
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    /// Sets the prefix marking a token as an option name. The default is
    /// `"-"`; setting the empty string resets to the default.
    pub fn set_indicator(&mut self, indicator: &str) {
        self.indicator = if indicator.is_empty() { "-" } else { indicator }.to_string();
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn set_validator(&mut self, validator: Validator) {
        self.validator = validator;
    }

    /// Looks up a parsed option. Populated only by a [`Parser::parse`] call
    /// that returned [`Outcome::Success`].
    pub fn opt(&self, name: &str) -> Option<&ParsedOpt> {
        self.opts.get(name)
    }

    /// Mutable variant of [`Parser::opt`]; file-handle extraction stores
    /// the handle inside the option and so needs it.
    pub fn opt_mut(&mut self, name: &str) -> Option<&mut ParsedOpt> {
        self.opts.get_mut(name)
    }

    /// All parsed options, ordered by identifier.
    pub fn opts(&self) -> impl Iterator<Item = &ParsedOpt> {
        self.opts.values()
    }

    /// Scans the arguments into (option, raw arguments) groups, validating
    /// and committing each group as the next one begins. A `<indicator>h`
    /// token wins immediately over everything else; an empty argument
    /// vector requests help as well. After the scan, every required option
    /// must be present.
    ///
    /// Calling `parse` again on unchanged input yields the same result.
    /// The table is rebuilt from scratch and published only on success;
    /// after a failed or help-requesting parse there is nothing to query.
    pub fn parse(&mut self) -> Result<Outcome> {
        self.opts.clear();
        if self.args.is_empty() {
            return Ok(Outcome::HelpRequested);
        }

        let must_validate = self.validator.opt_count() > 0;
        let mut table = BTreeMap::new();
        let mut cur_name = String::new();
        let mut cur_args: Vec<String> = Vec::new();

        for token in &self.args {
            let token = token.trim();
            if let Some(stripped) = token.strip_prefix(self.indicator.as_str()) {
                if stripped == "h" {
                    return Ok(Outcome::HelpRequested);
                }
                // A new option begins; the pending group is complete. Tokens
                // seen before the first option have no group and are dropped.
                if !cur_name.is_empty() {
                    if must_validate {
                        self.validator.validate(&cur_name, &cur_args)?;
                    }
                    let opt = ParsedOpt::build(&self.validator, &cur_name, &cur_args);
                    table.insert(mem::take(&mut cur_name), opt);
                }
                cur_name = stripped.to_string();
                cur_args.clear();
            } else if !token.is_empty() {
                cur_args.push(token.to_string());
            }
        }

        // The final group is committed even when its name is empty; with a
        // non-empty validator that fails as an invalid option.
        if must_validate {
            self.validator.validate(&cur_name, &cur_args)?;
        }
        let opt = ParsedOpt::build(&self.validator, &cur_name, &cur_args);
        table.insert(cur_name, opt);

        for spec in self.validator.opts() {
            if !spec.is_optional() && !table.contains_key(spec.name()) {
                bail!("Missing required option \"{}\".", spec.name());
            }
        }

        self.opts = table;
        Ok(Outcome::Success)
    }
}
