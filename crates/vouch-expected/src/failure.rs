//! Opaque, type-erased failure handle.
//!
//! A [`Failure`] is what an [`Expected`](crate::Expected) stores in place of a
//! value. It is immutable once captured and reference counted, so cloning a
//! handle shares the same underlying error rather than copying it.

use core::any::TypeId;
use core::fmt;
use std::error::Error;
use std::sync::Arc;

use vouch_errors::SlicedTypeError;

type Erased = dyn Error + Send + Sync + 'static;

/// A captured failure.
///
/// The only way to look inside is by kind: [`Failure::is`],
/// [`Failure::downcast_ref`], or [`Failure::chain_contains`].
///
/// # Examples
///
/// ```
/// use vouch_expected::Failure;
///
/// let failure = Failure::new(std::fmt::Error);
/// assert!(failure.is::<std::fmt::Error>());
/// assert!(!failure.is::<std::io::Error>());
///
/// let shared = failure.clone();
/// assert!(Failure::ptr_eq(&failure, &shared));
/// ```
#[derive(Clone)]
pub struct Failure {
    inner: Arc<Erased>,
}

impl Failure {
    /// Capture a concrete error.
    ///
    /// No slicing check is done here; use [`Failure::try_new`] when `E` may
    /// itself be a type-erasing handle.
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(err),
        }
    }

    /// Capture a concrete error, rejecting type-erasing handles.
    ///
    /// `Failure` and `Arc<dyn Error + Send + Sync>` both implement `Error`, so
    /// they would be accepted by [`Failure::new`] and wrapped one level deep,
    /// after which kind matching sees the wrapper instead of the error inside.
    /// The same holds for either handle behind a `Box`, an `Arc` or a
    /// `&'static` reference, and for a bare `&'static dyn Error`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicedTypeError`] if `E` is a type-erasing handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use vouch_expected::Failure;
    ///
    /// let failure = Failure::new(std::fmt::Error);
    /// assert!(Failure::try_new(failure).is_err());
    /// assert!(Failure::try_new(std::fmt::Error).is_ok());
    /// ```
    pub fn try_new<E>(err: E) -> Result<Self, SlicedTypeError>
    where
        E: Error + Send + Sync + 'static,
    {
        if erases_dynamic_type::<E>() {
            return Err(SlicedTypeError::new(core::any::type_name::<E>()));
        }
        Ok(Self::new(err))
    }

    /// Capture an already boxed error without adding a layer.
    pub fn from_boxed(err: Box<Erased>) -> Self {
        Self {
            inner: Arc::from(err),
        }
    }

    /// Capture an already shared error without adding a layer.
    pub fn from_arc(err: Arc<Erased>) -> Self {
        Self { inner: err }
    }

    /// Returns `true` if the captured error is exactly of kind `K`.
    pub fn is<K>(&self) -> bool
    where
        K: Error + 'static,
    {
        self.inner.is::<K>()
    }

    /// The captured error as `K`, if it is exactly of that kind.
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: Error + 'static,
    {
        self.inner.downcast_ref::<K>()
    }

    /// Returns `true` if the captured error, or any error in its `source()`
    /// chain, is of kind `K`.
    pub fn chain_contains<K>(&self) -> bool
    where
        K: Error + 'static,
    {
        let mut current: Option<&(dyn Error + 'static)> = Some(self.as_error());
        while let Some(err) = current {
            if err.is::<K>() {
                return true;
            }
            current = err.source();
        }
        false
    }

    /// Borrow the captured error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Returns `true` if both handles share the same captured error.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

/// Handles, and handles behind one pointer or reference, that would hide the
/// captured error's kind if wrapped.
fn erases_dynamic_type<E: 'static>() -> bool {
    let erasing = [
        TypeId::of::<Failure>(),
        TypeId::of::<Box<Failure>>(),
        TypeId::of::<Arc<Failure>>(),
        TypeId::of::<&'static Failure>(),
        TypeId::of::<Arc<Erased>>(),
        TypeId::of::<Box<Arc<Erased>>>(),
        TypeId::of::<Arc<Arc<Erased>>>(),
        TypeId::of::<&'static Arc<Erased>>(),
        TypeId::of::<&'static Erased>(),
    ];
    erasing.contains(&TypeId::of::<E>())
}

impl From<Box<Erased>> for Failure {
    fn from(err: Box<Erased>) -> Self {
        Self::from_boxed(err)
    }
}

impl From<Arc<Erased>> for Failure {
    fn from(err: Arc<Erased>) -> Self {
        Self::from_arc(err)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.inner).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}
