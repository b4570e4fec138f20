//! Map definitions for data types and property editors.

use crate::models::{DataTypeDisplay, DatabaseType, PropertyEditorBasic};
use quill_core::{DataType, PropertyEditor, QuillError, QuillResult, ValueStorageType};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::PropertyEditorCollection;
use std::sync::Arc;

/// Declares how data types and property editors map to their models.
#[derive(Clone)]
pub struct DataTypeMapDefinition {
    property_editors: Arc<PropertyEditorCollection>,
}

impl DataTypeMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(property_editors: Arc<PropertyEditorCollection>) -> Self {
        Self { property_editors }
    }

    fn map_editor_basic(
        source: &PropertyEditor,
        target: &mut PropertyEditorBasic,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.alias = source.alias.clone();
        target.name = source.name.clone();
        target.icon = source.icon.clone();
        target.group = source.group.clone();
        target.is_deprecated = source.is_deprecated;
        Ok(())
    }

    fn map_data_type(
        &self,
        source: &DataType,
        target: &mut DataTypeDisplay,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        // A data type configured against an unregistered editor alias is a
        // dangling reference.
        let editor = self
            .property_editors
            .get_by_alias(&source.editor_alias)
            .ok_or_else(|| QuillError::dangling_reference("PropertyEditor", &source.editor_alias))?;

        target.id = source.id.value();
        target.name = source.name.clone();
        target.editor_alias = source.editor_alias.clone();
        target.editor_name = editor.name.clone();
        target.database_type = Self::database_type(editor.value_type);
        Ok(())
    }

    /// The database column type a storage kind persists into.
    fn database_type(value_type: ValueStorageType) -> DatabaseType {
        match value_type {
            ValueStorageType::Nvarchar => DatabaseType::Nvarchar,
            ValueStorageType::Ntext => DatabaseType::Ntext,
            ValueStorageType::Integer => DatabaseType::Integer,
            ValueStorageType::Decimal => DatabaseType::Decimal,
            ValueStorageType::Date => DatabaseType::Date,
        }
    }
}

impl MapDefinition for DataTypeMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        mapper.define_with_ctor(
            |_source: &PropertyEditor, _context| PropertyEditorBasic::default(),
            Self::map_editor_basic,
        )?;

        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &DataType, _context| DataTypeDisplay::default(),
            move |source, target, context| this.map_data_type(source, target, context),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_type_from_storage_kind() {
        assert_eq!(
            DataTypeMapDefinition::database_type(ValueStorageType::Ntext),
            DatabaseType::Ntext
        );
        assert_eq!(
            DataTypeMapDefinition::database_type(ValueStorageType::Date),
            DatabaseType::Date
        );
    }
}
