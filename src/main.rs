use clap::Parser;

use mmeson::cli::Cli;
use mmeson::config::AppConfig;
use mmeson::errors::MmesonError;
use mmeson::runtime;
use mmeson::system::logging::init_logging;
use mmeson::system::panic_handler::{RunMode, install_panic_hook};

fn main() {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::generate_sample_config());
        return;
    }

    let config = AppConfig::load(cli.config.as_deref());

    let interactive = cli.command.is_none();
    install_panic_hook(if interactive { RunMode::Tui } else { RunMode::Cli });

    let guard = match init_logging(&config.logging, interactive) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            None
        }
    };

    let code = match runtime::run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            match e.downcast_ref::<MmesonError>() {
                Some(err) => {
                    eprintln!("{}", err.format_colored());
                    err.exit_code()
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    1
                }
            }
        }
    };

    // 退出前释放日志 guard，确保缓冲的日志写出
    drop(guard);
    std::process::exit(code);
}
