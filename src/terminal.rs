use std::path::Path;

use log::debug;

use crate::errors::{AppError, Result};

/// Simulated typing into whatever currently holds input focus.
pub trait Keystrokes {
    fn type_text(&mut self, text: &str) -> Result<()>;
    fn press_enter(&mut self) -> Result<()>;
}

/// The `cd` line typed into the terminal. Always the quoted native path,
/// independent of output formatting flags.
pub fn cd_command(path: &Path) -> String {
    format!("cd \"{}\"", path.display())
}

/// Type `cd "<path>"` and press Enter. Fails before typing anything if `path`
/// is not a directory.
pub fn change_directory(keys: &mut dyn Keystrokes, path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(AppError::NotADirectory(path.to_path_buf()));
    }
    let command = cd_command(path);
    debug!("injecting: {command}");
    keys.type_text(&command)?;
    keys.press_enter()
}

/// Keyboard simulation through the platform input APIs.
/// The backend connection is opened on first use.
#[cfg(feature = "keystrokes")]
#[derive(Default)]
pub struct SystemKeystrokes {
    enigo: Option<enigo::Enigo>,
}

#[cfg(feature = "keystrokes")]
impl SystemKeystrokes {
    fn backend(&mut self) -> Result<&mut enigo::Enigo> {
        if self.enigo.is_none() {
            let enigo = enigo::Enigo::new(&enigo::Settings::default())
                .map_err(|e| AppError::Keystrokes(e.to_string()))?;
            self.enigo = Some(enigo);
        }
        self.enigo
            .as_mut()
            .ok_or_else(|| AppError::Keystrokes("keyboard backend unavailable".to_owned()))
    }
}

#[cfg(feature = "keystrokes")]
impl Keystrokes for SystemKeystrokes {
    fn type_text(&mut self, text: &str) -> Result<()> {
        use enigo::Keyboard;
        self.backend()?
            .text(text)
            .map_err(|e| AppError::Keystrokes(e.to_string()))
    }

    fn press_enter(&mut self) -> Result<()> {
        use enigo::{Direction, Key, Keyboard};
        self.backend()?
            .key(Key::Return, Direction::Click)
            .map_err(|e| AppError::Keystrokes(e.to_string()))
    }
}

/// Stand-in for builds without the `keystrokes` feature.
#[cfg(not(feature = "keystrokes"))]
#[derive(Default)]
pub struct SystemKeystrokes;

#[cfg(not(feature = "keystrokes"))]
impl Keystrokes for SystemKeystrokes {
    fn type_text(&mut self, _text: &str) -> Result<()> {
        Err(AppError::Keystrokes(
            "built without the `keystrokes` feature".to_owned(),
        ))
    }

    fn press_enter(&mut self) -> Result<()> {
        Err(AppError::Keystrokes(
            "built without the `keystrokes` feature".to_owned(),
        ))
    }
}
