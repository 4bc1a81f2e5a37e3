use std::{
    env,
    fs,
    io::{self, Read, Write},
    process::ExitCode,
};

use log::{debug, error, info};
use type_getter::{
    annotate,
    errors::errors::{Error, ErrorImpl},
};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [FILE]", args[0]);
        return ExitCode::from(2);
    }

    let source = match read_source(args.get(1).map(String::as_str)) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let output = match annotate(&source) {
        Ok(output) => output,
        Err(error) => {
            debug!("{} ({})", error.get_error_name(), error.get_tip());
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        error!("Failed to write output: {}", err);
        return ExitCode::FAILURE;
    }

    info!("Wrote {} bytes", output.len());
    ExitCode::SUCCESS
}

/// Reads the whole source from `file`, or from standard input when no file is given.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which the lexer treats as
/// an ordinary single-character token.
fn read_source(file: Option<&str>) -> Result<String, Error> {
    let (source_name, result) = match file {
        Some(path) => (String::from(path), fs::read(path)),
        None => {
            let mut buffer = Vec::new();
            let result = io::stdin().read_to_end(&mut buffer).map(|_| buffer);
            (String::from("<stdin>"), result)
        }
    };

    match result {
        Ok(bytes) => {
            info!("Read {} bytes from {}", bytes.len(), source_name);
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(err) => Err(Error::new(
            ErrorImpl::UnreadableSource {
                source_name,
                reason: err.to_string(),
            },
            1,
        )),
    }
}
