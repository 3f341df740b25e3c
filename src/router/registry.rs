//! Panel table: the navigation menu and its handlers
//!
//! Built once at startup and immutable afterwards. Construction validates the
//! table so lookups later never have to: labels are unique, Settings exists,
//! and Settings is reachable without a credential.

use super::error::RegistryError;
use crate::panels::{self, PanelHandler, SETTINGS};
use std::collections::HashMap;
use std::fmt;

/// One navigation entry
pub struct PanelDescriptor {
    label: String,
    gated: bool,
    handler: Box<dyn PanelHandler>,
}

impl PanelDescriptor {
    pub fn new(label: impl Into<String>, gated: bool, handler: impl PanelHandler + 'static) -> Self {
        Self {
            label: label.into(),
            gated,
            handler: Box::new(handler),
        }
    }

    /// Entry that requires a credential
    pub fn gated(label: impl Into<String>, handler: impl PanelHandler + 'static) -> Self {
        Self::new(label, true, handler)
    }

    /// Entry reachable without a credential
    pub fn open(label: impl Into<String>, handler: impl PanelHandler + 'static) -> Self {
        Self::new(label, false, handler)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_gated(&self) -> bool {
        self.gated
    }

    pub fn handler(&self) -> &dyn PanelHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for PanelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelDescriptor")
            .field("label", &self.label)
            .field("gated", &self.gated)
            .field("title", &self.handler.title())
            .finish()
    }
}

/// Ordered, validated set of panels
#[derive(Debug)]
pub struct PanelRegistry {
    descriptors: Vec<PanelDescriptor>,
    index: HashMap<String, usize>,
    settings: usize,
}

impl PanelRegistry {
    pub fn new(descriptors: Vec<PanelDescriptor>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (i, descriptor) in descriptors.iter().enumerate() {
            if index.insert(descriptor.label.clone(), i).is_some() {
                return Err(RegistryError::DuplicateLabel(descriptor.label.clone()));
            }
        }

        let settings = *index
            .get(SETTINGS)
            .ok_or(RegistryError::MissingSettings(SETTINGS))?;
        if descriptors[settings].gated {
            return Err(RegistryError::GatedSettings(SETTINGS));
        }

        Ok(Self {
            descriptors,
            index,
            settings,
        })
    }

    /// The standard creator-suite menu
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(panels::catalog())
    }

    pub fn get(&self, label: &str) -> Option<&PanelDescriptor> {
        self.index.get(label).map(|&i| &self.descriptors[i])
    }

    /// The Settings entry (always present, never gated)
    pub fn settings(&self) -> &PanelDescriptor {
        &self.descriptors[self.settings]
    }

    /// Entries in menu order
    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }
}
