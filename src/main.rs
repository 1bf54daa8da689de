// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use relfeed::{generate, parse_flag, Config, Error};

use std::env;
use std::io::{self, stdin, stdout, BufWriter, Read};
use std::process::ExitCode;

static HELP: &str = r#"Turn a list of repository releases into a JSON feed

Usage: relfeed <LEAVE_OUT_PRERELEASES>
       relfeed [COMMAND]

Reads the JSON response of the "list releases" endpoint of a repository hosting API
(GET /repos/{owner}/{repo}/releases) from the standard input
and writes a JSON feed of the releases to the standard output.

Arguments:
  <LEAVE_OUT_PRERELEASES>  Skip prereleases? One of y, yes, t, true, on, 1, n, no, f, false, off, 0

Commands:
  help      Print this message
  version   Print version information

Environment variables:
  RUST_LOG  Log filter for diagnostics written to the standard error
"#;

const BUFFER_SIZE: usize = 16384;

enum Cmd {
    Generate(String),
    Help,
    Version,
    Missing,
    Invalid,
}

fn get_command() -> Cmd {
    let mut args = env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("help") | Some("-h") | Some("--help") => Cmd::Help,
        Some("version") | Some("-V") | Some("--version") => Cmd::Version,
        Some(flag) => Cmd::Generate(flag.to_owned()),
        None => Cmd::Missing,
    };
    if args.next().is_some() {
        Cmd::Invalid
    } else {
        command
    }
}

/// Read the whole standard input and write the feed to the standard output.
fn run(flag: &str) -> Result<(), Error> {
    let config = Config::new(parse_flag(flag)?);
    let mut input = Vec::with_capacity(BUFFER_SIZE);
    stdin().lock().read_to_end(&mut input)?;
    log::debug!("Read {} bytes of input", input.len());
    let output = BufWriter::with_capacity(BUFFER_SIZE, stdout().lock());
    generate(&input, &config, output)
}

#[cfg(feature = "bin")]
fn init_logger() {
    if env::var("RUST_LOG").is_ok() {
        env_logger::init();
    }
}

#[cfg(not(feature = "bin"))]
fn init_logger() {}

fn main() -> ExitCode {
    init_logger();

    let flag = match get_command() {
        Cmd::Help => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Cmd::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Cmd::Invalid => {
            eprintln!("Error: invalid arguments");
            eprint!("{}", HELP);
            return ExitCode::from(2);
        }
        Cmd::Missing => return report(Error::MissingFlag),
        Cmd::Generate(flag) => flag,
    };

    match run(&flag) {
        Ok(()) => ExitCode::SUCCESS,
        // The reader of the output went away, nothing more to do.
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::FAILURE,
        Err(e) => report(e),
    }
}

fn report(e: Error) -> ExitCode {
    eprintln!("Error: {}", e);
    if e.is_argument_error() {
        eprintln!("Run `relfeed help` for usage");
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
