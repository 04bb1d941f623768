//! 测试公共工具：伪造的 Meson 构建目录和记录调用的 runner

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use mmeson::errors::Result;
use mmeson::meson::{CommandOutput, MesonRunner};

pub struct FakeBuildDir {
    pub root: TempDir,
}

impl FakeBuildDir {
    /// `<tmp>/src` as the source tree, `<tmp>/src/build` as the build directory.
    pub fn new(options: Value) -> Self {
        let root = TempDir::new().expect("创建临时目录失败");
        let dir = Self { root };
        fs::create_dir_all(dir.source()).unwrap();
        dir.write_info(
            "meson-info.json",
            &json!({
                "meson_version": {"full": "1.4.0", "major": 1, "minor": 4, "patch": 0},
                "directories": {
                    "source": dir.source(),
                    "build": dir.path(),
                    "info": dir.path().join("meson-info"),
                },
                "introspection": {"version": {"full": "1.0.0"}},
            }),
        );
        dir.write_info(
            "intro-projectinfo.json",
            &json!({"descriptive_name": "demo", "version": "0.1.0", "subprojects": []}),
        );
        dir.write_info("intro-buildoptions.json", &options);
        dir
    }

    pub fn source(&self) -> PathBuf {
        self.root.path().join("src")
    }

    pub fn path(&self) -> PathBuf {
        self.source().join("build")
    }

    pub fn write_info(&self, file: &str, content: &Value) {
        let info = self.path().join("meson-info");
        fs::create_dir_all(&info).unwrap();
        fs::write(info.join(file), serde_json::to_string_pretty(content).unwrap()).unwrap();
    }
}

/// A realistic option listing, deliberately out of display order.
pub fn sample_options() -> Value {
    json!([
        {
            "name": "buildtype", "value": "debug", "section": "core", "machine": "any",
            "type": "combo", "description": "Build type to use",
            "choices": ["plain", "debug", "debugoptimized", "release", "minsize", "custom"]
        },
        {
            "name": "b_lto", "value": false, "section": "base", "machine": "any",
            "type": "boolean", "description": "Use link time optimization"
        },
        {
            "name": "c_args", "value": [], "section": "compiler", "machine": "host",
            "type": "array", "description": "Extra arguments passed to the c compiler"
        },
        {
            "name": "prefix", "value": "/usr/local", "section": "directory", "machine": "any",
            "type": "string", "description": "Installation prefix"
        },
        {
            "name": "docs", "value": true, "section": "user", "machine": "any",
            "type": "boolean", "description": "Build the documentation"
        },
        {
            "name": "zlib:tests", "value": false, "section": "user", "machine": "any",
            "type": "boolean", "description": "Build zlib tests"
        },
        {
            "name": "backend_max_links", "value": 0, "section": "backend", "machine": "any",
            "type": "integer", "description": "Maximum number of linker processes to run or 0 for no limit"
        }
    ])
}

/// One recorded invocation
#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Records every call; fails the subcommand named in `fail_on`.
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Call>>,
    fail_on: Option<(&'static str, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing(subcommand: &'static str, status: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some((subcommand, status)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl MesonRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        let status = match self.fail_on {
            Some((name, status)) if name == subcommand => status,
            _ => 0,
        };
        Ok(CommandOutput {
            status: Some(status),
            stdout: format!("{} output\n", subcommand),
            stderr: if status == 0 {
                String::new()
            } else {
                format!("{} failed\n", subcommand)
            },
        })
    }
}
