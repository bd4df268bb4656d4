/// Type alias for Result with anyhow::Error as the error type.
/// Application and adapter code propagates errors through this alias;
/// core domain operations return `BuildError` directly.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
