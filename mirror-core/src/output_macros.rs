//! Output macros for the npm-mirror CLI.
//!
//! Status lines and notices go to stdout; errors and hints go to stderr.

#[macro_export]
macro_rules! mirror_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! mirror_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! mirror_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! mirror_success {
    ($($arg:tt)*) => {
        println!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! mirror_info {
    ($($arg:tt)*) => {
        println!("ℹ {}", format!($($arg)*));
    };
}
