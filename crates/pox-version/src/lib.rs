//! Version parsing, ordering and range constraints
//!
//! Two flavors share one comparison core:
//!
//! - [`semver`]: strict `major.minor.patch` versions following SemVer 2.0,
//!   with npm-style shorthand ranges (`1.2`, `1.x`, `~1.2`, `^0.3`);
//! - [`version`]: relaxed versions with any number of segments (`1.2.3.4`,
//!   `17.03.0-ce`, `1.7rc2`), the pessimistic operator `~>` and hyphen ranges.
//!
//! ```
//! use pox_version::version::{Constraints, Version};
//!
//! let v: Version = "1.2.3.4".parse().unwrap();
//! let c: Constraints = ">= 1.2, < 1.3 || ~> 2.0".parse().unwrap();
//! assert!(c.check(&v));
//! ```

pub mod collection;
mod comparator;
pub mod constraint;
mod error;
mod prerelease;
pub mod segment;
pub mod semver;
pub mod version;

#[cfg(test)]
mod proptests;

pub use comparator::Comparator;
pub use constraint::{Operand, Operator, VersionConstraint};
pub use error::{Error, Result};
pub use segment::{BigNumber, Segment, Segments};
pub use version::{Constraints, Version};
