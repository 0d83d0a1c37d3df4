//! Arbitrary-length complex discrete Fourier transforms.
//!
//! A [`Plan`] fixes the geometry of a transform (lengths, batch count,
//! strides, direction) and owns its scratch space and twiddle caches, so it
//! can be executed repeatedly on fresh buffers. Each length is handled by the
//! engine [`classify`] picks for it: small prime butterflies, iterative
//! radix-2, Rader's algorithm for other primes, and a recursive mixed-radix
//! split for everything else.
//!
//! Forward transforms use `exp(-i*2*pi*k*n/N)`. Backward transforms use the
//! conjugate and are only normalised when the plan asks for it with
//! [`PlanFlags::NORMALIZE_BACKWARD`].

pub mod error;
pub mod fft;
pub mod plan;

pub use error::{ErrorKind, FourierError};
pub use fft::classify::{classify, Algorithm};
pub use fft::complex::{Direction, Sample};
pub use fft::reference::reference_dft;
pub use fft::shift::{fftshift, ifftshift};
pub use fft::twiddle::{RotationTables, TwiddleCache};
pub use fft::Layout;
pub use plan::{Placement, Plan, PlanFlags, PlanOptions};
