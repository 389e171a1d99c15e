//! Print the Berlin Clock of every `hh:mm:ss` argument

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use berlin_clock::{ParseError, convert_optional, convert_str};
use snafu::{ResultExt, Snafu};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("Failed to convert argument {position}"))]
    Convert {
        position: usize,
        source: ParseError,
    },
    #[snafu(display("Failed to write the Berlin Clock"))]
    Write { source: std::io::Error },
}

/// Write the clock of every argument to `out`, separated by a blank line. Stops
/// at the first argument that can not be converted
fn run<W: Write>(args: impl IntoIterator<Item = OsString>, out: &mut W) -> Result<(), Error> {
    let mut args = args.into_iter().enumerate().peekable();

    if args.peek().is_none() {
        let display = convert_optional(None).context(ConvertSnafu { position: 1_usize })?;
        return writeln!(out, "{display}").context(WriteSnafu);
    }

    for (index, arg) in args {
        let display = match arg.to_str() {
            Some(text) => convert_str(text),
            None => Err(ParseError::InvalidFormat {
                text: arg.to_string_lossy().into_owned(),
            }),
        }
        .context(ConvertSnafu {
            position: index + 1,
        })?;

        if index > 0 {
            writeln!(out).context(WriteSnafu)?;
        }
        writeln!(out, "{display}").context(WriteSnafu)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdout = std::io::stdout();
    match run(std::env::args_os().skip(1), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", snafu::Report::from_error(e));
            ExitCode::FAILURE
        }
    }
}
