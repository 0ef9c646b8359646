//! Document-level orchestration for slovar conversion
//!
//! This crate provides chunking on segment boundaries, sequential and
//! parallel executors, adaptive mode selection and the
//! [`DocumentConverter`] entry point.
//!
//! # Example
//!
//! ```rust
//! use slovar_engine::{DocumentConverter, Input, Variant};
//!
//! let converter = DocumentConverter::builder()
//!     .target(Variant::HrLanguage)
//!     .build()
//!     .unwrap();
//!
//! let output = converter
//!     .convert(Input::from_text("Идем у Београд, хлеб купујем."))
//!     .unwrap();
//! assert_eq!(output.text, "Idem u Beograd, kruh kupujem.");
//! ```

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use adaptive_dispatcher::AdaptiveDispatcher;
pub use config::{ChunkPolicy, EngineConfig};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, ExecutionOutput, Executor};
pub use input::Input;
pub use processor::{ConversionMetadata, DocumentConverter, DocumentConverterBuilder, Output};

// Re-export from core for convenience
pub use slovar_core::{ConversionStats, DictionaryStore, Variant};
