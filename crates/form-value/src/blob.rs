//! Binary and opaque leaves of the value tree.
//!
//! Neither kind is ever looked into by the accessor or the serializer. Both
//! are reference counted so a clone keeps the identity of the original.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A binary blob, optionally named (a `File` in browser terms).
#[derive(Clone)]
pub struct Blob(Arc<BlobData>);

#[derive(PartialEq, Eq)]
struct BlobData {
    name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

impl Blob {
    /// Create an anonymous blob.
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self(Arc::new(BlobData {
            name: None,
            content_type: content_type.into(),
            bytes: bytes.into(),
        }))
    }

    /// Create a named blob, as produced by an `<input type="file">`.
    ///
    /// # Example
    ///
    /// ```
    /// use nordstern_form_value::Blob;
    ///
    /// let file = Blob::file("test.txt", "test content", "text/plain");
    /// assert_eq!(file.name(), Some("test.txt"));
    /// assert_eq!(file.size(), 12);
    /// ```
    pub fn file(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self(Arc::new(BlobData {
            name: Some(name.into()),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.0.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    pub fn size(&self) -> usize {
        self.0.bytes.len()
    }

    /// Check whether two handles refer to the same blob.
    pub fn ptr_eq(&self, other: &Blob) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("name", &self.0.name)
            .field("type", &self.0.content_type)
            .field("size", &self.0.bytes.len())
            .finish()
    }
}

/// A value the form layer carries but never inspects.
///
/// Callbacks, class instances and map/set-like collections end up here.
/// Equality is identity.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Name of the wrapped Rust type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.type_name)
    }
}
