//! Capability marker implemented by every generated Rust proxy.

/// The two operations a lazy-load runtime needs from a proxy.
///
/// A proxy starts uninitialized; the runtime flips the flag once the document's data has been fully populated.
///
/// # Example
/// ```ignore
/// fn ensure_loaded<P: ProxyInterface>(proxy: &mut P) {
///     if !proxy.is_initialized() {
///         // fetch the delayed fields...
///         proxy.set_initialized(true);
///     }
/// }
/// ```
pub trait ProxyInterface {
    fn is_initialized(&self) -> bool;

    fn set_initialized(&mut self, initialized: bool);
}
