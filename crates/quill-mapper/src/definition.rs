//! Map definition trait.

use crate::mapper::MapperBuilder;
use quill_core::QuillResult;

/// A set of related conversions registered together at startup.
///
/// Implementations are constructor-injected with the collaborator services
/// their conversions need, and register every conversion for one entity
/// family in [`MapDefinition::define_maps`].
pub trait MapDefinition {
    /// Registers this definition's conversions with the builder.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-definition error if any of the registered type
    /// pairs is already taken.
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()>;
}
