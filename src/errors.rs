///Result type for this crate, defaults to [`SigfuzzError`] as the error
pub type Result<T, E = SigfuzzError> = std::result::Result<T, E>;

///Error type covering everything that can go wrong when building or querying
///an index. Alphabet implementations raise [`SigfuzzError::UnknownCharacter`]
///(or map the character instead, that is their call); whatever they do is
///passed on unchanged by the hashing, indexing and search layers.
#[derive(Debug, thiserror::Error)]
pub enum SigfuzzError {
    #[error("invalid argument: {arg}: {msg}")]
    InvalidArgument { arg: &'static str, msg: String },

    #[error("character {0:?} is not covered by the alphabet")]
    UnknownCharacter(char),
}

impl SigfuzzError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }
}
