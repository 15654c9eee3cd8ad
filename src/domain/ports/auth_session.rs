/// Opaque authenticated session for the disclosure provider.
///
/// The core never constructs or refreshes one; the auth adapter does.
/// A screening pass checks validity once up front and treats the token
/// as read-only for its duration.
pub trait AuthSession: Send + Sync {
    /// Whether this session can authenticate provider requests.
    fn is_valid(&self) -> bool;

    /// Bearer token for provider requests.
    fn token(&self) -> &str;
}
