use std::{any::Any, fmt, rc::Rc};

/// An opaque reference to a host-owned callable.
///
/// The payload is whatever the host needs to run the closure later; this
/// crate only hands it back through [`ClosureRef::downcast_ref`]. Two
/// references are equal when they point at the same payload.
#[derive(Clone)]
pub struct ClosureRef(Rc<dyn Any>);

impl ClosureRef {
    /// Wraps a host payload.
    #[must_use]
    pub fn new<T: Any>(payload: T) -> Self {
        Self(Rc::new(payload))
    }

    /// Returns the payload if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether both references point at the same payload.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for ClosureRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ClosureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClosureRef({:p})", Rc::as_ptr(&self.0))
    }
}
