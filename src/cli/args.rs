//! Command-line surface.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

/// Most passwords `-b` will join into one clipboard write.
pub const MAX_BOARD_COUNT: u64 = 10_000;

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "passgen",
    version,
    about = "Random password generator with live regeneration and clipboard copy",
    long_about = r#"
Generates passwords from letters, optionally with digits and the symbols
!@#$%^&*()_+. Every character is drawn independently and uniformly, so an
enabled class is not guaranteed to appear.

Run without arguments (or with -i) for the interactive widget. Pass any
option to print passwords directly.

The default random source is fast but not cryptographically secure; use
--urandom to draw from the operating system instead.
"#,
    after_help = "Examples:\n  passgen                 Interactive widget\n  passgen -l 12 -d -s     One 12-character password with digits and symbols\n  passgen -n 5 -l 16      Five letter-only passwords\n  passgen -b -d           Copy to the clipboard instead of printing\n  passgen -l 10 -d --save Make length 10 with digits the default"
)]
pub struct Args {
    /// Characters per password (kept within 4-20)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Include digits 0-9
    #[arg(short, long, overrides_with = "no_digits")]
    pub digits: bool,

    /// Leave digits out, even if saved settings include them
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include the symbols !@#$%^&*()_+
    #[arg(short, long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave symbols out, even if saved settings include them
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// How many passwords to generate (printed as they are made)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub number: u64,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Start from the saved settings instead of the defaults
    #[arg(long)]
    pub saved: bool,

    /// Save the resulting length and classes as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Draw randomness from the operating system
    #[arg(short, long)]
    pub urandom: bool,

    /// Open the interactive widget
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Tri-state view of a class flag pair: `None` leaves the base value.
    pub fn digits_override(&self) -> Option<bool> {
        flag_pair(self.digits, self.no_digits)
    }

    pub fn symbols_override(&self) -> Option<bool> {
        flag_pair(self.symbols, self.no_symbols)
    }
}

/// Parse `argv`. On failure clap's message is printed and the exit code is
/// returned: 1 for usage errors, 0 for `--help` and `--version`.
pub fn parse_args<I, T>(argv: I) -> Result<Args, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
