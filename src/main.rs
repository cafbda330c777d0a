use std::{env, ffi::OsString, process::ExitCode, time::Instant};

use condlex::{display_error, lexer::lexer::Lexer, logging};
use log::{debug, error};

/// Picks the input string out of the command line (program name first).
fn input_from_args(args: Vec<OsString>) -> Result<String, String> {
    if args.len() != 2 {
        return Err(String::from("must provide input as string"));
    }

    args.into_iter()
        .nth(1)
        .ok_or_else(|| String::from("must provide input as string"))?
        .into_string()
        .map_err(|arg| format!("input is not valid UTF-8: {:?}", arg))
}

fn main() -> ExitCode {
    logging::init();

    let source = match input_from_args(env::args_os().collect()) {
        Ok(source) => source,
        Err(message) => {
            error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    for token in Lexer::new(source.clone(), None) {
        match token {
            Ok(token) => println!("{}", token),
            Err(error) => {
                display_error(&error, &source);
                return ExitCode::FAILURE;
            }
        }
    }

    debug!("Tokenized in {:?}", start.elapsed());
    ExitCode::SUCCESS
}
