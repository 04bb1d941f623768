use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmesonError {
    Configuration(String),
    Validation(String),
    NotFound(String),
    Introspection(String),
    FileOperation(String),
    /// Meson exited unsuccessfully. `output` is its stdout followed by its
    /// stderr, untouched.
    ExternalCommand {
        command: String,
        status: Option<i32>,
        output: String,
    },
}

impl MmesonError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MmesonError::Configuration(_) => "E001",
            MmesonError::Validation(_) => "E002",
            MmesonError::NotFound(_) => "E003",
            MmesonError::Introspection(_) => "E004",
            MmesonError::FileOperation(_) => "E005",
            MmesonError::ExternalCommand { .. } => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MmesonError::Configuration(_) => "Configuration Error",
            MmesonError::Validation(_) => "Validation Error",
            MmesonError::NotFound(_) => "Option Not Found",
            MmesonError::Introspection(_) => "Introspection Error",
            MmesonError::FileOperation(_) => "File Operation Error",
            MmesonError::ExternalCommand { .. } => "External Command Failed",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            MmesonError::Configuration(msg) => msg.clone(),
            MmesonError::Validation(msg) => msg.clone(),
            MmesonError::NotFound(msg) => msg.clone(),
            MmesonError::Introspection(msg) => msg.clone(),
            MmesonError::FileOperation(msg) => msg.clone(),
            MmesonError::ExternalCommand {
                command, status, ..
            } => match status {
                Some(code) => format!("`{}` exited with status {}", command, code),
                None => format!("`{}` was terminated by a signal", command),
            },
        }
    }

    /// Process exit code to use when this error ends the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            MmesonError::Configuration(_) => 2,
            MmesonError::ExternalCommand { status, .. } => status.unwrap_or(1),
            _ => 1,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MmesonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MmesonError {}

// 便捷的构造函数
impl MmesonError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        MmesonError::Configuration(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        MmesonError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        MmesonError::NotFound(msg.into())
    }

    pub fn introspection<T: Into<String>>(msg: T) -> Self {
        MmesonError::Introspection(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MmesonError::FileOperation(msg.into())
    }

    pub fn external_command<C: Into<String>, O: Into<String>>(
        command: C,
        status: Option<i32>,
        output: O,
    ) -> Self {
        MmesonError::ExternalCommand {
            command: command.into(),
            status,
            output: output.into(),
        }
    }
}

impl From<std::io::Error> for MmesonError {
    fn from(err: std::io::Error) -> Self {
        MmesonError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MmesonError {
    fn from(err: serde_json::Error) -> Self {
        MmesonError::Introspection(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MmesonError>;
