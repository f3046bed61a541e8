mod args;
mod context;
pub mod prompts;
mod quiet;

pub use args::{Args, parse_args};
pub use context::Context;

/// Resolve flags and either generate directly or open the widget.
pub fn run(args: Args, interactive: bool) -> crate::error::Result<()> {
    Context::new(args, interactive).run()
}
