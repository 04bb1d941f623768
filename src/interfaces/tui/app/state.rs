//! App state definition and basic state management

use crate::meson::BuildDir;
use crate::runtime::ExitAction;
use crate::store::{MesonOption, OptionStore};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    EditValue,
    Help,
    Exiting,
}

/// 文本编辑弹窗的状态（string / integer / array 选项）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// 正在编辑的选项名
    pub option_name: String,
    pub input: String,
    /// 上一次提交被拒绝的原因
    pub error: Option<String>,
}

impl EditorState {
    pub fn open(&mut self, option_name: &str, text: String) {
        self.option_name = option_name.to_string();
        self.input = text;
        self.error = None;
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
    }

    pub fn pop(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.option_name.clear();
        self.input.clear();
        self.error = None;
    }
}

pub struct App<'a> {
    pub store: &'a mut OptionStore,
    pub build_dir: &'a BuildDir,
    /// `Build options for <project> <version> (Meson <version>)`
    pub header: String,
    pub current_screen: CurrentScreen,
    pub editor: EditorState,

    /// 有未应用修改时 q 先弹出确认
    pub confirm_discard: bool,
    /// 设置后主循环退出
    pub exit_action: Option<ExitAction>,

    // UI state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub status_message: String,
    pub error_message: String,
}

impl<'a> App<'a> {
    pub fn new(
        store: &'a mut OptionStore,
        build_dir: &'a BuildDir,
        header: String,
        confirm_discard: bool,
    ) -> Self {
        Self {
            store,
            build_dir,
            header,
            current_screen: CurrentScreen::Main,
            editor: EditorState::default(),
            confirm_discard,
            exit_action: None,
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn selected_option(&self) -> Option<&MesonOption> {
        self.store.get_index(self.selected_index)
    }

    /// Name of the selected option, owned so the store can be mutated next.
    pub fn selected_name(&self) -> Option<String> {
        self.selected_option().map(|o| o.name.clone())
    }

    pub fn option_count(&self) -> usize {
        self.store.len()
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn should_exit(&self) -> bool {
        self.exit_action.is_some()
    }
}
