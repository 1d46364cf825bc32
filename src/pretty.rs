macro_rules! print_cmd_error {
    ($tt:tt) => {
        eprintln!("\x1b[1;31m[ERROR] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        eprintln!("\x1b[1;31m[ERROR] {}\x1b[0m", $tt);
        eprintln!("{}\n", core::format_args!($($tts)*));
    }
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

macro_rules! print_cmd_warn {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;35m[WARN] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
pub(crate) use print_cmd_warn;
