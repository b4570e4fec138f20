//! # Quill Mapper
//!
//! The context-aware mapping registry of the Quill backoffice.
//!
//! Conversions from domain entities to editing-UI models are registered
//! once at startup against `(source, target)` type pairs, then dispatched
//! by the concrete runtime type of the source. A [`MapperContext`] threads
//! ambient parameters (culture, included properties, current user) through
//! every nested conversion of a call tree, so a value set at the top-level
//! call site is visible arbitrarily deep.
//!
//! ```
//! use quill_mapper::MapperBuilder;
//!
//! struct Tag { text: String }
//! #[derive(Default)]
//! struct TagModel { text: String }
//!
//! # fn run() -> quill_core::QuillResult<()> {
//! let mut builder = MapperBuilder::new();
//! builder.define_with_ctor(
//!     |_source: &Tag, _context| TagModel::default(),
//!     |source, target: &mut TagModel, _context| {
//!         target.text = source.text.clone();
//!         Ok(())
//!     },
//! )?;
//! let mapper = builder.build();
//!
//! let model: TagModel = mapper.map(&Tag { text: "blue".into() })?;
//! assert_eq!(model.text, "blue");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod context;
pub mod definition;
pub mod mapper;

pub use context::{keys, MapperContext};
pub use definition::MapDefinition;
pub use mapper::{Mapper, MapperBuilder};
