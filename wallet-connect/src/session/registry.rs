//! Adapter factory registry.
//!
//! The standard factories are registered at startup. The richer mobile adapter
//! lives in an optional module that may load after first paint, or never; it
//! is installed here whenever it shows up and the session rebuilds its
//! adapter set from whatever the registry holds at that moment.

use std::rc::Rc;

use super::adapters::AdapterFactory;

#[derive(Clone, Default)]
pub struct AdapterRegistry {
    standard: Vec<Rc<dyn AdapterFactory>>,
    mobile: Option<Rc<dyn AdapterFactory>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `factories` as the standard adapters, in order.
    pub fn with_standard(factories: impl IntoIterator<Item = Rc<dyn AdapterFactory>>) -> Self {
        Self {
            standard: factories.into_iter().collect(),
            mobile: None,
        }
    }

    /// Append a standard factory; registration order is display order.
    pub fn register_standard(&mut self, factory: Rc<dyn AdapterFactory>) {
        self.standard.push(factory);
    }

    /// Install the mobile adapter factory.
    ///
    /// Returns `false`, keeping the existing factory, if one is already installed.
    pub fn install_mobile(&mut self, factory: Rc<dyn AdapterFactory>) -> bool {
        if self.mobile.is_some() {
            log::debug!("Mobile adapter factory already installed, ignoring {}", factory.name());
            return false;
        }
        self.mobile = Some(factory);
        true
    }

    pub fn standard(&self) -> &[Rc<dyn AdapterFactory>] {
        &self.standard
    }

    pub fn mobile(&self) -> Option<&Rc<dyn AdapterFactory>> {
        self.mobile.as_ref()
    }
}
