//! Documents: the prototype product family.
//!
//! [`Document`] is the worked example for the clone engine. Its aliasing
//! behavior per mode:
//!
//! - **Shallow**: `attachments` and `header.logo` remain shared with the
//!   source; mutating attachments through a shallow clone is observable
//!   through the source. Everything else is copied.
//! - **Deep**: all mutable structure is severed. A document whose header
//!   still holds a [`NativeHandle`] cannot be deep-cloned — the handle wraps
//!   an OS resource with no duplication primitive — and the call fails with
//!   the full field path `header.logo`.

use creational_framework::{FrameworkError, Prototype};
use std::sync::{Arc, Mutex, PoisonError};

/// Opaque OS-level resource. There is no way to duplicate the underlying
/// descriptor, so any deep clone that reaches one must fail.
#[derive(Debug)]
pub struct NativeHandle {
    pub descriptor: u64,
}

/// Document header, a nested prototype.
#[derive(Debug)]
pub struct Header {
    pub title: String,
    /// Shared with shallow clones; blocks deep clones while present.
    pub logo: Option<Arc<NativeHandle>>,
}

impl Prototype for Header {
    /// Shallow: `logo` remains shared with the source.
    fn clone_shallow(&self) -> Self {
        Self {
            title: self.title.clone(),
            logo: self.logo.clone(),
        }
    }

    fn clone_deep(&self) -> Result<Self, FrameworkError> {
        if self.logo.is_some() {
            return Err(FrameworkError::non_cloneable("logo"));
        }
        Ok(Self {
            title: self.title.clone(),
            logo: None,
        })
    }
}

/// A document in the draw tool.
#[derive(Debug)]
pub struct Document {
    pub body: String,
    /// Shared with shallow clones.
    pub attachments: Arc<Mutex<Vec<String>>>,
    pub header: Header,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attachments: Arc::new(Mutex::new(Vec::new())),
            header: Header {
                title: title.into(),
                logo: None,
            },
        }
    }

    /// Attaches an OS-level logo resource, making the document
    /// deep-uncloneable until the handle is released.
    pub fn with_logo(mut self, handle: NativeHandle) -> Self {
        self.header.logo = Some(Arc::new(handle));
        self
    }

    pub fn attach(&self, name: impl Into<String>) {
        self.attachments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.into());
    }

    pub fn attachment_count(&self) -> usize {
        self.attachments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Prototype for Document {
    /// Shallow: `attachments` and the header's `logo` remain shared with the
    /// source.
    fn clone_shallow(&self) -> Self {
        Self {
            body: self.body.clone(),
            attachments: Arc::clone(&self.attachments),
            header: self.header.clone_shallow(),
        }
    }

    fn clone_deep(&self) -> Result<Self, FrameworkError> {
        let attachments = self
            .attachments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(Self {
            body: self.body.clone(),
            attachments: Arc::new(Mutex::new(attachments)),
            header: self
                .header
                .clone_deep()
                .map_err(|e| e.prefix_field("header"))?,
        })
    }
}
