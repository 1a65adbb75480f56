//! Builder utilities for configuring [`Paver`] runs.
//!
//! The builder collects the hub list and validates it before a [`Paver`] is
//! constructed. Checks that need the graph (hub range) happen in
//! [`Paver::run`].

use crate::{Result, error::PaverError, paver::Paver};

/// Configures and constructs [`Paver`] instances.
///
/// # Examples
/// ```
/// use paver_core::PaverBuilder;
///
/// let paver = PaverBuilder::new()
///     .with_hubs([2, 3, 5])
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(paver.hubs(), &[2, 3, 5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaverBuilder {
    hubs: Vec<usize>,
}

impl PaverBuilder {
    /// Creates a builder with no hubs configured.
    ///
    /// # Examples
    /// ```
    /// use paver_core::PaverBuilder;
    ///
    /// assert!(PaverBuilder::new().hubs().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the hub list.
    ///
    /// Order is kept and duplicates are allowed; a repeated hub only adds
    /// self-pairs, which mark nothing.
    #[must_use]
    pub fn with_hubs(mut self, hubs: impl IntoIterator<Item = usize>) -> Self {
        self.hubs = hubs.into_iter().collect();
        self
    }

    /// Appends one hub.
    ///
    /// # Examples
    /// ```
    /// use paver_core::PaverBuilder;
    ///
    /// let builder = PaverBuilder::new().with_hub(4).with_hub(1);
    /// assert_eq!(builder.hubs(), &[4, 1]);
    /// ```
    #[must_use]
    pub fn with_hub(mut self, hub: usize) -> Self {
        self.hubs.push(hub);
        self
    }

    /// Returns the configured hubs.
    #[must_use]
    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    /// Validates the configuration and constructs a [`Paver`] instance.
    ///
    /// # Errors
    /// Returns [`PaverError::NoHubs`] when no hub was configured.
    ///
    /// # Examples
    /// ```
    /// use paver_core::{PaverBuilder, PaverError};
    ///
    /// let err = PaverBuilder::new().build().expect_err("hubs are required");
    /// assert_eq!(err, PaverError::NoHubs);
    /// ```
    pub fn build(self) -> Result<Paver> {
        if self.hubs.is_empty() {
            return Err(PaverError::NoHubs);
        }
        Ok(Paver::new(self.hubs))
    }
}
