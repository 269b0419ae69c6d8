use std::sync::Arc;

/// Informational log sink injected into an account.
///
/// The only contract is that a message is accepted. Implementations must not
/// panic and have no way to report failure.
pub trait Log: Send + Sync {
    fn info(&self, message: &str);
}

impl<L: Log + ?Sized> Log for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

impl<L: Log + ?Sized> Log for Box<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}
