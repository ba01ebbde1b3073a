mod telemetry;

use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
};

use hello_core::say_hello;
use hello_util::{load_env_file, AppConfig};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_error(&*err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    info!(stage = "app", env = %config.environment.as_str(), "writing greeting");

    write_greeting(&mut io::stdout().lock())?;
    Ok(())
}

/// Writes the greeting as a single line. Nothing else is written to `out`.
fn write_greeting(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", say_hello())?;
    out.flush()
}

fn describe_error(err: &dyn Error) -> String {
    format!("error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hello_util::ConfigError;

    #[test]
    fn writes_exactly_one_greeting_line() {
        let mut out = Vec::new();
        write_greeting(&mut out).expect("write to vec");
        assert_eq!(out, b"Hello, world!\n");
    }

    #[test]
    fn describe_error_uses_display_message() {
        let err = ConfigError::InvalidEnvironment("bogus".to_string());
        let message = describe_error(&err);
        assert_eq!(
            message,
            "error: APP_ENV must be one of 'development', 'production', or 'test' (got bogus)"
        );
        assert!(!message.contains("InvalidEnvironment"));
    }
}
