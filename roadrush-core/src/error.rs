use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    #[error("unknown car type '{0}'")]
    UnknownCarType(String),

    #[error("no car was selected; a race can't start without a confirmed selection")]
    NoCarSelected,

    #[error("the countdown has already been started")]
    CountdownAlreadyStarted,

    #[error("the race hasn't started yet")]
    RaceNotStarted,

    #[error("the race is over")]
    RaceOver,
}

pub type Result<T> = std::result::Result<T, RaceError>;
