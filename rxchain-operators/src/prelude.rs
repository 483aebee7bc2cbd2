// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator extension traits.
//!
//! ```
//! use rxchain_operators::prelude::*;
//! ```

pub use crate::filter::FilterExt;
pub use crate::map::MapExt;
pub use crate::try_filter::TryFilterExt;
pub use crate::try_map::TryMapExt;
