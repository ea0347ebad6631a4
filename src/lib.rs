//! # Sugars Ext
//!
//! Extension traits for Rust primitives and collections - dates, iterators,
//! lists, maps, numbers and strings.
//!
//! Every group lives behind its own feature and attaches methods to types you
//! already have, so a single `use sugars_ext::prelude::*;` is enough:
//!
//! ## Features
//!
//! - `datetime` - start-of-period, calendar shifting and time-of-day comparison on `chrono::DateTime`
//! - `iterable` - indexed/first-last mapping, filtering and lazy adapters on any `Iterator`
//! - `list` - conditional append, positional partition and separator insertion on `Vec`
//! - `map` - filtering, first-match lookup and key/value transformation on maps
//! - `number` - safe divisors, magnitudes and factor flooring on primitive numbers
//! - `string` - capitalization, trailing zero trimming and lenient date parsing on `str`
//! - `hashbrown` - `MapExt` for `hashbrown::HashMap`
//! - `serde` - `Serialize`/`Deserialize` for the value types returned here
//!
//! ## Example
//!
//! ```rust
//! use sugars_ext::prelude::*;
//!
//! let doubled = [10, 20, 30, 40].into_iter().map_to_vec(|x| x * 2);
//! assert_eq!(doubled, vec![20, 40, 60, 80]);
//!
//! let spaced = vec![10, 20, 30].insert_between(0);
//! assert_eq!(spaced, vec![10, 0, 20, 0, 30]);
//!
//! assert_eq!(123_i64.magnitude(), 1);
//! assert_eq!("12.3400".clear_trailing_zeros(), "12.34");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;

#[cfg(feature = "datetime")]
pub mod datetime;

#[cfg(feature = "iterable")]
pub mod iterable;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "number")]
pub mod number;

#[cfg(feature = "string")]
pub mod string;

pub use error::{Result, SugarError};

#[cfg(feature = "datetime")]
pub use datetime::DateTimeExt;

#[cfg(feature = "iterable")]
pub use iterable::IterableExt;

#[cfg(feature = "list")]
pub use list::{ListExt, OddEven};

#[cfg(feature = "map")]
pub use map::MapExt;

#[cfg(feature = "number")]
pub use number::{CentsExt, DivisorExt, NumberExt};

#[cfg(feature = "string")]
pub use string::StrExt;

/// Glob-importable re-exports of every enabled extension trait.
pub mod prelude {
    pub use crate::error::SugarError;

    #[cfg(feature = "datetime")]
    pub use crate::datetime::DateTimeExt;

    #[cfg(feature = "iterable")]
    pub use crate::iterable::IterableExt;

    #[cfg(feature = "list")]
    pub use crate::list::{ListExt, OddEven};

    #[cfg(feature = "map")]
    pub use crate::map::MapExt;

    #[cfg(feature = "number")]
    pub use crate::number::{CentsExt, DivisorExt, NumberExt};

    #[cfg(feature = "string")]
    pub use crate::string::StrExt;
}
