use crate::core::{DataSource, Deferred};

/// High-level consumer that depends only on the [`DataSource`] contract.
///
/// The source is injected at construction; the consumer never builds one
/// itself and never inspects which backend sits behind it.
pub struct DataConsumer<S: DataSource> {
    source: S,
}

impl<S: DataSource> DataConsumer<S> {
    /// Takes ownership of the injected source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the source's deferred value unchanged.
    pub fn retrieve(&self) -> Deferred<'_> {
        tracing::debug!("Retrieving data");
        self.source.get()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
