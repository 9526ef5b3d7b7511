use std::io::Write;

use expect_test::expect;
use xopts::{OptSpec, Outcome, Ty, Validator};

use crate::{check, parser};

fn demo_validator() -> Validator {
    let mut validator = Validator::new();
    validator.add_opt(OptSpec::new("file").arg("f", Ty::File));
    validator.add_opt(OptSpec::new("amount").arg("s", Ty::I64));
    validator
}

#[test]
fn smoke() {
    let mut validator = Validator::new();
    validator.add_opt(OptSpec::new("amount").arg("s", Ty::I64));
    validator.add_opt(OptSpec::new("name").arg("n", Ty::String).optional());

    check(
        validator.clone(),
        "-amount 1024",
        expect![[r#"
            "amount" ["s": "1024"]
        "#]],
    );
    check(
        validator.clone(),
        "-amount 1024 -name somebody",
        expect![[r#"
            "amount" ["s": "1024"]
            "name" ["n": "somebody"]
        "#]],
    );
    check(
        validator.clone(),
        "-amount abc",
        expect![[r#"Argument "abc" is not of type 'long long'."#]],
    );
    check(validator.clone(), "-amount", expect![[r#"Invalid argument count for option "amount". Expected: 1. Got 0."#]]);
    check(validator.clone(), "-name somebody", expect![[r#"Missing required option "amount"."#]]);
    check(validator.clone(), "-h", expect![["help requested"]]);
    check(validator, "", expect![["help requested"]]);
}

#[test]
fn end_to_end_with_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "0123456789").unwrap();
    let path = tmp.path().to_str().unwrap().to_string();

    let args = vec!["prog".to_string(), "-file".to_string(), path, "-amount".to_string(), "4".to_string()];
    let mut p = xopts::Parser::new(args);
    p.set_validator(demo_validator());

    assert_eq!(p.parse().unwrap(), Outcome::Success);
    let amount: i64 = p.opt("amount").unwrap().get("s").unwrap();
    assert_eq!(amount, 4);

    let file = p.opt_mut("file").unwrap();
    assert_eq!(file.raw("f").unwrap(), tmp.path().to_str().unwrap());
    let mut handle = file.open("f").unwrap();
    let mut buf = String::new();
    std::io::Read::read_to_string(&mut handle, &mut buf).unwrap();
    assert_eq!(buf, "0123456789");
}

#[test]
fn unvalidated_mode_commits_everything() {
    check(
        Validator::new(),
        "-anything at all -other 1 2 3",
        expect![[r#"
            "anything" ["": "at", "": "all"]
            "other" ["": "1", "": "2", "": "3"]
        "#]],
    );
}

#[test]
fn parse_is_idempotent() {
    let mut p = parser(demo_validator(), "-amount 5");
    let first = crate::render(&mut p);
    let second = crate::render(&mut p);
    assert_eq!(first, second);

    let mut failing = parser(demo_validator(), "-amount nope");
    let first = crate::render(&mut failing);
    let second = crate::render(&mut failing);
    assert_eq!(first, "Argument \"nope\" is not of type 'long long'.");
    assert_eq!(first, second);
}
