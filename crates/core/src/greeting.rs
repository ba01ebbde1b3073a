/// The greeting returned by [`say_hello`].
pub const GREETING: &str = "Hello, world!";

/// Returns the fixed greeting.
///
/// The call has no inputs, touches no shared state and cannot fail, so it is
/// safe to invoke from any thread any number of times.
pub fn say_hello() -> &'static str {
    GREETING
}
