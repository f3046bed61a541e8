//! Interactive terminal widget.

mod input;
mod keys;
mod view;
mod widget;

use std::io::{self, Write};

use crossterm::event::{self, Event};
use log::debug;

pub use keys::{Action, EditKey, action_for};
pub use widget::{Flow, Widget};

use crate::clipboard::SystemClipboard;
use crate::controller::Controller;
use crate::error::Result;
use crate::pass::GenerationConfig;
use crate::settings::{self, Settings};
use crate::source::{Rand, SourceKind};
use crate::terminal::ScreenGuard;

/// Run the widget until the user quits.
pub fn run(settings: Settings, config: GenerationConfig, source: SourceKind) -> Result<()> {
    let settings_path = match settings::default_path() {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("saving disabled: {e}");
            None
        }
    };

    let controller = Controller::new(config, Rand::new(source));
    let mut widget = Widget::new(
        controller,
        SystemClipboard::new(),
        settings,
        settings_path,
        source,
    );

    let _screen = ScreenGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        draw(&widget, &mut stdout)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = action_for(&key, widget.is_editing()) else {
            continue;
        };
        if widget.handle(action) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn draw<W: Write>(widget: &Widget<SystemClipboard>, out: &mut W) -> io::Result<()> {
    out.write_all(b"\x1b[2J\x1b[H")?;
    view::frame(widget).write_to(out)
}
