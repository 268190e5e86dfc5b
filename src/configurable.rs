//! Configuration attachment for owner types

use crate::config::Config;

/// Types that carry a per-instance configuration snapshot
///
/// Owners opt in by composition: embed a [`Config`] field, seed it with
/// [`Config::from_defaults`] inside the constructor, and wire the two
/// accessors. The snapshot is attached exactly once, before the
/// constructor returns; there is no re-attachment or teardown.
///
/// ```
/// use configurable::{Config, Configurable, DefaultsStore};
///
/// struct Worker {
///     config: Config,
/// }
///
/// impl Worker {
///     fn new(defaults: &DefaultsStore) -> Self {
///         Self {
///             config: Config::from_defaults(defaults),
///         }
///     }
/// }
///
/// impl Configurable for Worker {
///     fn config(&self) -> &Config {
///         &self.config
///     }
///
///     fn config_mut(&mut self) -> &mut Config {
///         &mut self.config
///     }
/// }
///
/// let defaults = DefaultsStore::new();
/// defaults.configure(|config| config.set("threads", 4u64));
///
/// let worker = Worker::new(&defaults);
/// assert_eq!(worker.config().get_uint("threads").unwrap(), Some(4));
/// ```
pub trait Configurable {
    /// The attached configuration snapshot
    fn config(&self) -> &Config;

    /// Mutable access to the attached snapshot
    fn config_mut(&mut self) -> &mut Config;

    /// Reconfigure this instance in place
    ///
    /// Changes stay on this instance; the defaults store the instance was
    /// seeded from is not consulted or written.
    fn configure<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Config),
        Self: Sized,
    {
        f(self.config_mut());
    }
}
