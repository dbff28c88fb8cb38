use crate::app::prefs::PrefsError;
use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    PrefsError(PrefsError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        Self(AppErrorType::PrefsError(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            AppErrorType::GameError(e) => write!(f, "{}", e)?,
            AppErrorType::PrefsError(e) => write!(f, "invalid preferences: {}", e)?,
        }
        for t in (self.1).iter().rev() {
            write!(f, "\n in {}", t)?;
        }
        Ok(())
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

/// Lift a ggez result into an [`AppResult`] with a trace step
pub trait GameResultExtension<T> {
    fn into_with_trace<S: ToString>(self, s: S) -> AppResult<T>;
}

impl<T> GameResultExtension<T> for Result<T, GameError> {
    fn into_with_trace<S: ToString>(self, s: S) -> AppResult<T> {
        self.map_err(|e| AppError::from(e).with_trace_step(s))
    }
}

#[test]
fn test_trace_order() {
    let result: AppResult = Err(PrefsError::ZeroTickInterval.into());
    let err = result.with_trace_step("validate").with_trace_step("main").unwrap_err();
    assert_eq!(err.to_string(), "invalid preferences: tick interval must be positive\n in main\n in validate");
    assert!(matches!(err.error_type(), AppErrorType::PrefsError(PrefsError::ZeroTickInterval)));
}
