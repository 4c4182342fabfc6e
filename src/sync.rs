//! Lock used for shared random sources.
//!
//! With `std` this wraps [`std::sync::Mutex`] and ignores poisoning: a panic
//! mid-shuffle leaves the generator in a valid, merely advanced, state. Without
//! `std` it is [`spin::Mutex`], whose `lock` has the same signature.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
