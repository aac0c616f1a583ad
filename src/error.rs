use thiserror::Error;

/// Fatal parse failures. Everything softer (a regex chain that matches
/// nothing, an XML island that will not deserialize, a corrupt uuencoded
/// block) degrades to `None`/empty output instead of an error.
#[derive(Debug, Error)]
pub enum ParseError {
    /// SEC timestamps are either `YYYYMMDDHHMMSS` or `YYYYMMDD`. Anything
    /// with a different digit count is a header we cannot interpret.
    #[error("unrecognized SEC timestamp {0:?}: expected 8 or 14 digits")]
    TimestampFormat(String),

    #[error("submission header is missing {0}")]
    MissingHeader(&'static str),
}
