use std::process::ExitCode;

use caatinga_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    caatinga_driver::run(argument)
}
