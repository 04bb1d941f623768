//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 选项名列宽百分比（其余给值列）
pub const NAME_COLUMN_PERCENT: u16 = 40;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 编辑值弹窗
    pub const EDIT_VALUE: PopupSize = PopupSize::new(70, 40);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 85);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 选项值配色
pub mod value_colors {
    use ratatui::style::Color;

    /// true / enabled
    pub const ON: Color = Color::Green;
    /// false / disabled
    pub const OFF: Color = Color::Red;
    pub const CHOICE: Color = Color::LightBlue;
    pub const STRING: Color = Color::LightYellow;
    pub const INTEGER: Color = Color::LightMagenta;
    pub const ARRAY: Color = Color::Yellow;
}
