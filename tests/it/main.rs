mod smoke;

use expect_test::Expect;
use xopts::{Outcome, Parser, Validator};

fn parser(validator: Validator, args: &str) -> Parser {
    let args = std::iter::once("prog")
        .chain(args.split_ascii_whitespace())
        .map(str::to_string)
        .collect::<Vec<_>>();
    let mut p = Parser::new(args);
    p.set_validator(validator);
    p
}

fn render(p: &mut Parser) -> String {
    match p.parse() {
        Ok(Outcome::HelpRequested) => "help requested".to_string(),
        Ok(Outcome::Success) => {
            let mut buf = String::new();
            for opt in p.opts() {
                let args = opt
                    .args()
                    .map(|(name, value)| format!("{:?}: {:?}", name, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                buf.push_str(&format!("{:?} [{}]\n", opt.name(), args));
            }
            buf
        }
        Err(err) => err.to_string(),
    }
}

fn check(validator: Validator, args: &str, expect: Expect) {
    let mut p = parser(validator, args);
    expect.assert_eq(&render(&mut p));
}
