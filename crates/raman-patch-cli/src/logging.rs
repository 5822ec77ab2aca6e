use colored::{Color, Colorize, CustomColor};

pub const TAG_COLOR: CustomColor = CustomColor {
    r: 120,
    g: 80,
    b: 220,
};

const TAG: &str = "raman-patch";

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Routes `log` records from the patch library to stderr.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// `[raman-patch] <label>: <message>` with the tag and label coloured.
pub fn format_line(label: &str, color: Color, message: &str) -> String {
    format!(
        "[{}] {}: {}",
        TAG.custom_color(TAG_COLOR),
        label.color(color).bold(),
        message
    )
}

pub fn print_err(message: &str) {
    eprintln!("{}", format_line("error", Color::Red, message));
}

pub fn print_warn(message: &str) {
    eprintln!("{}", format_line("warning", Color::Yellow, message));
}

pub fn print_info(message: &str) {
    println!("{}", format_line("info", Color::Cyan, message));
}

pub fn print_success(message: &str) {
    println!("{}", format_line("success", Color::Green, message));
}

#[macro_export]
macro_rules! print_err {
    ($($arg:tt)*) => {
        $crate::logging::print_err(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! print_warn {
    ($($arg:tt)*) => {
        $crate::logging::print_warn(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        $crate::logging::print_info(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {
        $crate::logging::print_success(&format!($($arg)*));
    };
}

/// Debug output goes through the `log` facade so `RUST_LOG` controls it.
#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}
