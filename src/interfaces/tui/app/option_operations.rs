//! Option editing operations triggered from the TUI

use tracing::debug;

use super::state::{App, CurrentScreen};
use crate::meson::OptionType;
use crate::runtime::ExitAction;

impl App<'_> {
    /// Enter on the main screen: booleans toggle, combos rotate, every other
    /// type opens the editor popup.
    pub fn activate_selected(&mut self) {
        let Some((name, option_type, text)) = self
            .selected_option()
            .map(|o| (o.name.clone(), o.option_type, o.value().to_edit_text()))
        else {
            return;
        };

        match option_type {
            OptionType::Boolean => {
                let result = self.store.toggle(&name);
                self.report_change(&name, result.map(|_| ()));
            }
            OptionType::Combo => {
                let result = self.store.cycle(&name, true);
                self.report_change(&name, result.map(|_| ()));
            }
            OptionType::String | OptionType::Integer | OptionType::Array => {
                self.editor.open(&name, text);
                self.current_screen = CurrentScreen::EditValue;
            }
        }
    }

    /// Left/Right: rotate a combo, flip a boolean, ignore everything else.
    pub fn rotate_selected(&mut self, forward: bool) {
        let Some((name, option_type)) = self
            .selected_option()
            .map(|o| (o.name.clone(), o.option_type))
        else {
            return;
        };
        let result = match option_type {
            OptionType::Combo => self.store.cycle(&name, forward),
            OptionType::Boolean => self.store.toggle(&name),
            _ => return,
        };
        self.report_change(&name, result.map(|_| ()));
    }

    /// Second Enter in the editor popup. A rejected value keeps the editor
    /// open with the error shown under the input.
    pub fn submit_edit(&mut self) {
        let name = self.editor.option_name.clone();
        match self.store.set_from_str(&name, &self.editor.input) {
            Ok(_) => {
                self.editor.clear();
                self.current_screen = CurrentScreen::Main;
                self.report_change(&name, Ok(()));
            }
            Err(e) => {
                debug!("Rejected edit of {}: {}", name, e);
                self.editor.error = Some(e.message());
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor.clear();
        self.current_screen = CurrentScreen::Main;
    }

    pub fn reset_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            return;
        };
        let was_dirty = self.selected_option().is_some_and(|o| o.is_dirty());
        match self.store.reset(&name) {
            Ok(()) if was_dirty => self.set_status(format!("Reset {}", name)),
            Ok(()) => {}
            Err(e) => self.set_error(e.message()),
        }
    }

    pub fn discard_all(&mut self) {
        let discarded = self.store.discard();
        if discarded > 0 {
            self.set_status(format!("Discarded {} changes", discarded));
        } else {
            self.set_status("No pending changes".to_string());
        }
    }

    /// Re-read the build directory. Refused while edits are pending so
    /// nothing is lost silently.
    pub fn reload(&mut self) {
        if self.store.is_dirty() {
            self.set_error("Apply or discard pending changes before reloading".to_string());
            return;
        }
        match self.store.reload(self.build_dir) {
            Ok(()) => {
                self.selected_index = self
                    .selected_index
                    .min(self.option_count().saturating_sub(1));
                self.adjust_scroll_offset();
                self.set_status(format!("Reloaded {} options", self.option_count()));
            }
            Err(e) => self.set_error(e.message()),
        }
    }

    /// Leave the TUI with `action`, asking first when pending edits would be
    /// dropped and confirmation is enabled.
    pub fn request_exit(&mut self, action: ExitAction) {
        if action == ExitAction::Discard && self.confirm_discard && self.store.is_dirty() {
            self.current_screen = CurrentScreen::Exiting;
            return;
        }
        self.exit_action = Some(action);
    }

    fn report_change(&mut self, name: &str, result: crate::errors::Result<()>) {
        match result {
            Ok(()) => {
                let value = self
                    .store
                    .get(name)
                    .map(|o| o.value().to_string())
                    .unwrap_or_default();
                self.set_status(format!("{} = {}", name, value));
            }
            Err(e) => self.set_error(e.message()),
        }
    }
}
