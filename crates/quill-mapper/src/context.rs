//! The ambient context threaded through a conversion call tree.

use crate::mapper::Mapper;
use quill_core::{Culture, QuillResult, User};
use std::any::Any;
use std::collections::HashMap;

/// Well-known context item keys.
pub mod keys {
    /// The culture variant names and translations resolve against.
    pub const CULTURE: &str = "culture";
    /// An explicit allow-list of property aliases to map.
    pub const INCLUDED_PROPERTIES: &str = "includedProperties";
    /// The backoffice user the conversion runs on behalf of.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Ambient parameters for one conversion call tree.
///
/// A context is created fresh per top-level conversion and passed by
/// mutable reference through every nested conversion, so values set at the
/// top (or anywhere inside the tree) are visible to every conversion
/// invoked afterwards in the same tree. Contexts are never shared across
/// unrelated conversion requests.
pub struct MapperContext<'m> {
    mapper: &'m Mapper,
    items: Option<HashMap<String, Box<dyn Any + Send>>>,
}

impl<'m> MapperContext<'m> {
    /// Creates an empty context bound to a mapper.
    #[must_use]
    pub fn new(mapper: &'m Mapper) -> Self {
        Self {
            mapper,
            items: None,
        }
    }

    /// The mapper this context dispatches nested conversions through.
    #[must_use]
    pub fn mapper(&self) -> &'m Mapper {
        self.mapper
    }

    /// Whether any ambient item has been set.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }

    /// Sets an ambient item, replacing any previous value under the key.
    pub fn set<V: Any + Send>(&mut self, key: impl Into<String>, value: V) {
        self.items
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), Box::new(value));
    }

    /// Reads an ambient item, if present and of the expected type.
    #[must_use]
    pub fn get<V: Any>(&self, key: &str) -> Option<&V> {
        self.items.as_ref()?.get(key)?.downcast_ref::<V>()
    }

    /// Sets the ambient culture.
    pub fn set_culture(&mut self, culture: Culture) {
        self.set(keys::CULTURE, culture);
    }

    /// The ambient culture, if one was set.
    #[must_use]
    pub fn culture(&self) -> Option<&Culture> {
        self.get::<Culture>(keys::CULTURE)
    }

    /// Sets the explicit allow-list of property aliases to map.
    pub fn set_included_properties(&mut self, aliases: Vec<String>) {
        self.set(keys::INCLUDED_PROPERTIES, aliases);
    }

    /// The allow-list of property aliases, if one was set.
    #[must_use]
    pub fn included_properties(&self) -> Option<&[String]> {
        self.get::<Vec<String>>(keys::INCLUDED_PROPERTIES)
            .map(Vec::as_slice)
    }

    /// Whether a property alias passes the allow-list. Every alias passes
    /// when no list was set.
    #[must_use]
    pub fn is_property_included(&self, alias: &str) -> bool {
        self.included_properties()
            .map_or(true, |aliases| aliases.iter().any(|a| a == alias))
    }

    /// Sets the backoffice user the conversion runs on behalf of.
    pub fn set_current_user(&mut self, user: User) {
        self.set(keys::CURRENT_USER, user);
    }

    /// The backoffice user, if one was set.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.get::<User>(keys::CURRENT_USER)
    }

    /// Converts `source` to a new `T` within this call tree.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`].
    pub fn map<S: Any, T: Any>(&mut self, source: &S) -> QuillResult<T> {
        let mapper = self.mapper;
        mapper.map_with_context(source, self)
    }

    /// Converts an optional source within this call tree; absence
    /// propagates to absence.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`], for present sources only.
    pub fn map_opt<S: Any, T: Any>(&mut self, source: Option<&S>) -> QuillResult<Option<T>> {
        let mapper = self.mapper;
        mapper.map_opt_with_context(source, self)
    }

    /// Populates an existing target within this call tree.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map_into`].
    pub fn map_into<S: Any, T: Any>(&mut self, source: &S, target: &mut T) -> QuillResult<()> {
        let mapper = self.mapper;
        mapper.map_into_with_context(source, target, self)
    }

    /// Converts every source in order within this call tree.
    ///
    /// # Errors
    ///
    /// Fails on the first source whose conversion fails.
    pub fn map_iter<'s, S: Any, T: Any>(
        &mut self,
        sources: impl IntoIterator<Item = &'s S>,
    ) -> QuillResult<Vec<T>> {
        let mapper = self.mapper;
        mapper.map_iter_with_context(sources, self)
    }
}
