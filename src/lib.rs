// src/lib.rs
//! # tensor-byteswap
//!
//! Byte order conversion for serialized tensor payloads embedded in the
//! constant records of a model's function library.
//!
//! A model saved on a big-endian host stores every multi-byte constant in
//! big-endian order. Before it can be used on a little-endian host (or the
//! other way round) each constant buffer must be rewritten element by element.
//! This crate finds those buffers and rewrites them in place.
//!
//! ## Features
//!
//! - **Type aware**: only multi-byte numeric element types are touched
//! - **Strict**: buffers whose length does not split evenly into elements are rejected
//! - **In place**: no copies of the surrounding records
//! - **Parallel**: optional multi-threaded walk over large libraries
//! - **Async**: walk on tokio's blocking pool (feature `async`)
//!
//! ## Quick Start
//!
//! ### Swapping a single buffer
//!
//! ```rust
//! use tensor_byteswap::*;
//!
//! fn main() -> Result<()> {
//!     let mut buffer = TensorBuffer::new(
//!         ElementType::Float,
//!         [2],
//!         &[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02],
//!     );
//!
//!     swap_tensor_content(&mut buffer, Endianness::Big, Endianness::Little)?;
//!     assert_eq!(buffer.content(), &[0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]);
//!     Ok(())
//! }
//! ```
//!
//! ### Swapping a function library
//!
//! ```rust
//! use tensor_byteswap::*;
//!
//! fn main() -> Result<()> {
//!     let weights = TensorBuffer::from_values(
//!         ElementType::Int64,
//!         [3],
//!         &[1i64, 2, 3],
//!         Endianness::Big,
//!     )?;
//!
//!     let mut library = FunctionLibrary::new().with_function(
//!         FunctionDef::new("dense")
//!             .with_node(NodeRecord::new("x", "Placeholder"))
//!             .with_node(NodeRecord::constant("weights", weights)),
//!     );
//!
//!     let report = swap_library(&mut library, Endianness::Big, Endianness::Little)?;
//!     assert_eq!(report.buffers_swapped, 1);
//!
//!     let weights = library.functions[0].node("weights").unwrap().tensor_attr("value").unwrap();
//!     assert_eq!(weights.read_i64s(Endianness::Little)?, vec![1, 2, 3]);
//!     Ok(())
//! }
//! ```
//!
//! ### Async walking
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use tensor_byteswap::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let walker = AsyncRecordWalker::new(Endianness::Big, Endianness::native());
//!     let (library, report) = walker.swap_library(FunctionLibrary::new()).await?;
//!
//!     println!("{} buffers swapped in {} functions", report.buffers_swapped, library.len());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "async"))]
//! # fn main() {}
//! ```

// Modules
pub mod error;
pub mod types;
pub mod tensor;
pub mod graph;
pub mod walker;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SwapError, Result};

// Type exports
pub use types::{
    ElementType,
    Endianness,
};

// Tensor exports
pub use tensor::{
    is_swappable,
    is_swappable_tag,
    swap_tensor_content,
    SwapOutcome,
    TensorBuffer,
    TensorShape,
};

// Record exports
pub use graph::{
    AttrValue,
    FunctionDef,
    FunctionLibrary,
    GraphDef,
    NodeRecord,
};

// Walker exports
pub use walker::{
    swap_library,
    ParallelWalker,
    RecordWalker,
    SwapReport,
    WalkerConfig,
};

#[cfg(feature = "async")]
pub use walker::AsyncRecordWalker;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use tensor_byteswap::prelude::*;
    //! ```

    pub use crate::error::{SwapError, Result};
    pub use crate::graph::{FunctionDef, FunctionLibrary, NodeRecord};
    pub use crate::tensor::{swap_tensor_content, TensorBuffer};
    pub use crate::types::{ElementType, Endianness};
    pub use crate::walker::{swap_library, RecordWalker};

    #[cfg(feature = "async")]
    pub use crate::walker::AsyncRecordWalker;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
