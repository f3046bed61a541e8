//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, BufWriter, Write};

use log::debug;
use zeroize::Zeroizing;

use super::args::MAX_BOARD_COUNT;
use super::{Args, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::{Error, Result};
use crate::pass::{self, GeneratedPassword, GenerationConfig};
use crate::settings::Settings;
use crate::source::{Rand, SourceKind};
use crate::tui;

/// Application context for one invocation.
pub struct Context {
    pub settings: Settings,
    pub args: Args,
    interactive: bool,
}

impl Context {
    /// The widget always starts from saved settings; one-shot runs only do
    /// so with `--saved`.
    pub fn new(args: Args, interactive: bool) -> Self {
        quiet::set(args.quiet);

        let settings = if interactive || args.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                debug!("settings load failed: {e:?}");
                prompts::settings_load_failed(&e.to_string());
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self {
            settings,
            args,
            interactive,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let config = self.resolve_config();
        let source = self.source();
        debug!("resolved {config:?} with source {source:?}");

        if self.args.save {
            self.settings.apply(&config);
            self.settings.source = source;
            let path = self.settings.save_to_file()?;
            prompts::settings_saved(&path.display().to_string());
        }

        if self.interactive {
            return tui::run(self.settings.clone(), config, source);
        }

        let count = self.batch_size()?;
        let mut rng = Rand::new(source);
        let passwords = pass::generate_batch(config, count, &mut rng);

        let mut board = self.args.board.then(SystemClipboard::new);
        let mut out = BufWriter::new(io::stdout().lock());
        emit(passwords, board.as_mut(), &mut out)
    }

    /// Requested count, refused up front when it would be joined into one
    /// oversized clipboard write.
    pub fn batch_size(&self) -> Result<u64> {
        let count = self.args.number;
        if self.args.board && count > MAX_BOARD_COUNT {
            return Err(Error::TooManyForClipboard {
                count,
                max: MAX_BOARD_COUNT,
            });
        }
        Ok(count)
    }

    /// Saved or default settings, then flags, then the UI bounds.
    pub fn resolve_config(&self) -> GenerationConfig {
        let mut config = self.settings.generation_config();
        if let Some(length) = self.args.length {
            config.length = length;
        }
        if let Some(on) = self.args.digits_override() {
            config.include_digits = on;
        }
        if let Some(on) = self.args.symbols_override() {
            config.include_symbols = on;
        }

        let clamped = config.clamped();
        if clamped.length != config.length {
            prompts::length_clamped(config.length, clamped.length);
        }
        clamped
    }

    pub fn source(&self) -> SourceKind {
        if self.args.urandom {
            SourceKind::Urandom
        } else {
            self.settings.source
        }
    }
}

/// Copy to `board` when given, otherwise (or when the copy fails) print one
/// password per line as each is produced. An empty batch touches neither.
pub fn emit<I, C, W>(passwords: I, board: Option<&mut C>, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = GeneratedPassword>,
    C: Clipboard,
    W: Write,
{
    let mut passwords = passwords.into_iter();

    let Some(board) = board else {
        for pass in passwords {
            out.write_all(pass.as_str().as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        return Ok(());
    };

    let Some(first) = passwords.next() else {
        return Ok(());
    };
    let mut joined = Zeroizing::new(String::from(first.as_str()));
    let mut count = 1;
    for pass in passwords {
        joined.push('\n');
        joined.push_str(pass.as_str());
        count += 1;
    }

    match board.write_text(&joined) {
        Ok(()) => {
            prompts::clipboard_copied(count);
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            out.write_all(joined.as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;

    fn context(args: Args, settings: Settings) -> Context {
        Context {
            settings,
            args,
            interactive: false,
        }
    }

    fn passwords() -> Vec<GeneratedPassword> {
        vec![
            GeneratedPassword::from("abcdEFGH".to_string()),
            GeneratedPassword::from("ijklMNOP".to_string()),
        ]
    }

    #[test]
    fn flags_override_settings() {
        let settings = Settings {
            length: 16,
            include_digits: true,
            include_symbols: true,
            ..Default::default()
        };
        let args = Args {
            length: Some(10),
            no_digits: true,
            ..Default::default()
        };
        let config = context(args, settings).resolve_config();
        assert_eq!(config.length, 10);
        assert!(!config.include_digits);
        assert!(config.include_symbols);
    }

    #[test]
    fn settings_used_without_flags() {
        let settings = Settings {
            length: 12,
            include_digits: true,
            ..Default::default()
        };
        let config = context(Args::default(), settings).resolve_config();
        assert_eq!(config.length, 12);
        assert!(config.include_digits);
        assert!(!config.include_symbols);
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        quiet::set(true);
        let args = Args {
            length: Some(74),
            ..Default::default()
        };
        assert_eq!(context(args, Settings::default()).resolve_config().length, 20);

        let args = Args {
            length: Some(0),
            ..Default::default()
        };
        assert_eq!(context(args, Settings::default()).resolve_config().length, 4);
    }

    #[test]
    fn urandom_flag_overrides_saved_source() {
        let args = Args {
            urandom: true,
            ..Default::default()
        };
        assert_eq!(context(args, Settings::default()).source(), SourceKind::Urandom);
        let saved = Settings {
            source: SourceKind::Urandom,
            ..Default::default()
        };
        assert_eq!(context(Args::default(), saved).source(), SourceKind::Urandom);
        assert_eq!(
            context(Args::default(), Settings::default()).source(),
            SourceKind::Fast
        );
    }

    #[test]
    fn emit_prints_one_per_line() {
        let mut out = Vec::new();
        emit::<_, MemoryClipboard, _>(passwords(), None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abcdEFGH\nijklMNOP\n");
    }

    #[test]
    fn emit_copies_instead_of_printing() {
        quiet::set(true);
        let mut board = MemoryClipboard::default();
        let mut out = Vec::new();
        emit(passwords(), Some(&mut board), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(board.contents.as_deref(), Some("abcdEFGH\nijklMNOP"));
    }

    #[test]
    fn emit_falls_back_when_copy_fails() {
        let mut board = MemoryClipboard::rejecting();
        let mut out = Vec::new();
        emit(passwords(), Some(&mut board), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abcdEFGH\nijklMNOP\n");
    }

    #[test]
    fn empty_batch_leaves_clipboard_alone() {
        let mut board = MemoryClipboard {
            contents: Some("user data".into()),
            reject: false,
        };
        let mut out = Vec::new();
        emit(Vec::new(), Some(&mut board), &mut out).unwrap();
        assert_eq!(board.contents.as_deref(), Some("user data"));
        assert!(out.is_empty());
    }

    #[test]
    fn emit_streams_from_the_generator() {
        let config = GenerationConfig {
            length: 6,
            ..Default::default()
        };
        let mut rng = Rand::seeded(5);
        let mut out = Vec::new();
        emit::<_, MemoryClipboard, _>(
            pass::generate_batch(config, 1_000, &mut rng),
            None,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1_000);
        assert!(text.lines().all(|l| l.len() == 6));
    }

    #[test]
    fn oversized_clipboard_batch_is_refused() {
        let args = Args {
            number: MAX_BOARD_COUNT + 1,
            board: true,
            ..Default::default()
        };
        assert!(matches!(
            context(args, Settings::default()).batch_size(),
            Err(Error::TooManyForClipboard { .. })
        ));

        let args = Args {
            number: MAX_BOARD_COUNT + 1,
            ..Default::default()
        };
        assert_eq!(
            context(args, Settings::default()).batch_size().unwrap(),
            MAX_BOARD_COUNT + 1
        );
    }
}
