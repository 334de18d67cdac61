use std::fmt::{Display, Formatter};

/// The one failure kind of a probe run: the request (or the setup leading up to it) did not
/// complete. Carries a human-readable description including the full cause chain.
#[derive(Debug)]
pub struct ProbeError {
    pub message: String,
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<E> From<E> for ProbeError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ProbeError {
            message: format!("{:#}", err.into()),
        }
    }
}

pub type ProbeResult<T, E = ProbeError> = Result<T, E>;

#[macro_export]
macro_rules! bail_probe {
    ($msg:literal) => {
        return Err($crate::error::ProbeError { message: format!($msg) })
    };
    ($error_message:expr) => {
        return Err($crate::error::ProbeError { message: ($error_message).to_string() })
    };
    ($fmt:expr $(, $arg:expr)*) => {
        return Err($crate::error::ProbeError { message: format!($fmt $(, $arg)*) })
    };
}

#[macro_export]
macro_rules! exit_err {
    ($code:expr, $fmt:expr $(, $arg:expr)*) => {
        {
            eprintln!("❌ Error: {}", format!($fmt $(, $arg)*));
            std::process::exit($code);
        }
    };
}
