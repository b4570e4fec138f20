//! The mapping registry: registration and type-directed dispatch.

use crate::context::MapperContext;
use quill_core::{QuillError, QuillResult};
use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

type CtorFn =
    Box<dyn for<'m> Fn(&dyn Any, &MapperContext<'m>) -> QuillResult<Box<dyn Any>> + Send + Sync>;
type MapFn = Box<
    dyn for<'m> Fn(&dyn Any, &mut dyn Any, &mut MapperContext<'m>) -> QuillResult<()>
        + Send
        + Sync,
>;

struct Definition {
    source_type: &'static str,
    target_type: &'static str,
    ctor: Option<CtorFn>,
    map: MapFn,
}

/// Collects map definitions during the registration phase.
///
/// Registration happens once at startup; [`MapperBuilder::build`] then
/// freezes the table into an immutable [`Mapper`] that supports concurrent
/// lookups without locking.
#[derive(Default)]
pub struct MapperBuilder {
    definitions: HashMap<(TypeId, TypeId), Definition>,
}

impl MapperBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mutate-in-place conversion from `S` to `T`.
    ///
    /// Without a constructor the conversion can only be invoked through
    /// [`Mapper::map_into`] / [`MapperContext::map_into`] on an existing
    /// target instance.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::DuplicateDefinition`] if a conversion for the
    /// same type pair is already registered.
    pub fn define<S, T, M>(&mut self, map: M) -> QuillResult<()>
    where
        S: Any,
        T: Any,
        M: Fn(&S, &mut T, &mut MapperContext<'_>) -> QuillResult<()> + Send + Sync + 'static,
    {
        self.insert::<S, T>(None, Self::erase_map(map))
    }

    /// Registers a conversion from `S` to `T` with a constructor creating
    /// the target instance.
    ///
    /// The constructor runs first; the map function then populates the new
    /// instance. The conversion is usable through both [`Mapper::map`] and
    /// [`Mapper::map_into`].
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::DuplicateDefinition`] if a conversion for the
    /// same type pair is already registered.
    pub fn define_with_ctor<S, T, C, M>(&mut self, ctor: C, map: M) -> QuillResult<()>
    where
        S: Any,
        T: Any,
        C: Fn(&S, &MapperContext<'_>) -> T + Send + Sync + 'static,
        M: Fn(&S, &mut T, &mut MapperContext<'_>) -> QuillResult<()> + Send + Sync + 'static,
    {
        let ctor: CtorFn = Box::new(move |source, context| {
            let source = source.downcast_ref::<S>().ok_or_else(|| {
                QuillError::internal(format!("Mapper dispatched {} with a foreign source", type_name::<S>()))
            })?;
            Ok(Box::new(ctor(source, context)) as Box<dyn Any>)
        });
        self.insert::<S, T>(Some(ctor), Self::erase_map(map))
    }

    /// Runs a [`crate::MapDefinition`]'s registrations against this builder.
    ///
    /// # Errors
    ///
    /// Propagates any registration failure from the definition.
    pub fn add_definition(&mut self, definition: &dyn crate::MapDefinition) -> QuillResult<()> {
        definition.define_maps(self)
    }

    /// Freezes the registered conversions into an immutable [`Mapper`].
    #[must_use]
    pub fn build(self) -> Mapper {
        debug!("Mapper built with {} definitions", self.definitions.len());
        Mapper {
            definitions: self.definitions,
        }
    }

    fn erase_map<S, T, M>(map: M) -> MapFn
    where
        S: Any,
        T: Any,
        M: Fn(&S, &mut T, &mut MapperContext<'_>) -> QuillResult<()> + Send + Sync + 'static,
    {
        Box::new(move |source, target, context| {
            let source = source.downcast_ref::<S>().ok_or_else(|| {
                QuillError::internal(format!("Mapper dispatched {} with a foreign source", type_name::<S>()))
            })?;
            let target = target.downcast_mut::<T>().ok_or_else(|| {
                QuillError::internal(format!("Mapper dispatched {} with a foreign target", type_name::<T>()))
            })?;
            map(source, target, context)
        })
    }

    fn insert<S: Any, T: Any>(&mut self, ctor: Option<CtorFn>, map: MapFn) -> QuillResult<()> {
        let definition = Definition {
            source_type: type_name::<S>(),
            target_type: type_name::<T>(),
            ctor,
            map,
        };
        match self
            .definitions
            .entry((TypeId::of::<S>(), TypeId::of::<T>()))
        {
            Entry::Occupied(existing) => Err(QuillError::DuplicateDefinition {
                source_type: existing.get().source_type,
                target_type: existing.get().target_type,
            }),
            Entry::Vacant(slot) => {
                slot.insert(definition);
                Ok(())
            }
        }
    }
}

/// Type-directed conversion registry.
///
/// Immutable once built: every lookup reads the frozen definition table, so
/// unrelated conversions may run concurrently without locking. The runtime
/// type of a source is its concrete Rust type; dispatch is exact, with no
/// subtype walking.
pub struct Mapper {
    definitions: HashMap<(TypeId, TypeId), Definition>,
}

impl Mapper {
    /// Converts `source` to a new `T` using a fresh context.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::UnmappedType`] when no conversion is
    /// registered for `(S, T)`, or when the pair was registered without a
    /// constructor (use [`Mapper::map_into`] for those). Errors raised by
    /// the conversion function propagate unchanged.
    pub fn map<S: Any, T: Any>(&self, source: &S) -> QuillResult<T> {
        let mut context = MapperContext::new(self);
        self.map_with_context(source, &mut context)
    }

    /// Converts `source` to a new `T`, letting `configure` seed the fresh
    /// context (culture, included properties) before the conversion runs.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`].
    pub fn map_with<S: Any, T: Any>(
        &self,
        source: &S,
        configure: impl FnOnce(&mut MapperContext<'_>),
    ) -> QuillResult<T> {
        let mut context = MapperContext::new(self);
        configure(&mut context);
        self.map_with_context(source, &mut context)
    }

    /// Converts `source` to a new `T` inside an existing call tree,
    /// reusing the given context.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`].
    pub fn map_with_context<S: Any, T: Any>(
        &self,
        source: &S,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<T> {
        let definition = self.definition::<S, T>()?;
        let ctor = definition.ctor.as_ref().ok_or(QuillError::UnmappedType {
            source_type: definition.source_type,
            target_type: definition.target_type,
        })?;
        let mut target = ctor(source as &dyn Any, context)?;
        (definition.map)(source as &dyn Any, target.as_mut(), context)?;
        match target.downcast::<T>() {
            Ok(target) => Ok(*target),
            Err(_) => Err(QuillError::internal(format!(
                "Constructor for {} produced a foreign target",
                type_name::<T>()
            ))),
        }
    }

    /// Converts an optional source, propagating absence to absence without
    /// invoking any conversion function.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`], for present sources only.
    pub fn map_opt<S: Any, T: Any>(&self, source: Option<&S>) -> QuillResult<Option<T>> {
        let mut context = MapperContext::new(self);
        self.map_opt_with_context(source, &mut context)
    }

    /// Optional-source variant of [`Mapper::map_with_context`].
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map`], for present sources only.
    pub fn map_opt_with_context<S: Any, T: Any>(
        &self,
        source: Option<&S>,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Option<T>> {
        match source {
            Some(source) => self.map_with_context(source, context).map(Some),
            None => Ok(None),
        }
    }

    /// Populates an existing `target` from `source` using a fresh context.
    ///
    /// Works for definitions registered with or without a constructor.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::UnmappedType`] when no conversion is
    /// registered for `(S, T)`.
    pub fn map_into<S: Any, T: Any>(&self, source: &S, target: &mut T) -> QuillResult<()> {
        let mut context = MapperContext::new(self);
        self.map_into_with_context(source, target, &mut context)
    }

    /// In-place variant reusing an existing call tree's context.
    ///
    /// # Errors
    ///
    /// Same as [`Mapper::map_into`].
    pub fn map_into_with_context<S: Any, T: Any>(
        &self,
        source: &S,
        target: &mut T,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        let definition = self.definition::<S, T>()?;
        (definition.map)(source as &dyn Any, target as &mut dyn Any, context)
    }

    /// Converts every source in order, all within one fresh context.
    ///
    /// # Errors
    ///
    /// Fails on the first source whose conversion fails.
    pub fn map_iter<'s, S: Any, T: Any>(
        &self,
        sources: impl IntoIterator<Item = &'s S>,
    ) -> QuillResult<Vec<T>> {
        let mut context = MapperContext::new(self);
        self.map_iter_with_context(sources, &mut context)
    }

    /// Enumerable variant reusing an existing call tree's context.
    ///
    /// # Errors
    ///
    /// Fails on the first source whose conversion fails.
    pub fn map_iter_with_context<'s, S: Any, T: Any>(
        &self,
        sources: impl IntoIterator<Item = &'s S>,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Vec<T>> {
        sources
            .into_iter()
            .map(|source| self.map_with_context(source, context))
            .collect()
    }

    /// The number of registered conversions.
    #[must_use]
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Checks whether a conversion is registered for `(S, T)`.
    #[must_use]
    pub fn is_defined<S: Any, T: Any>(&self) -> bool {
        self.definitions
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<T>()))
    }

    fn definition<S: Any, T: Any>(&self) -> QuillResult<&Definition> {
        self.definitions
            .get(&(TypeId::of::<S>(), TypeId::of::<T>()))
            .ok_or(QuillError::UnmappedType {
                source_type: type_name::<S>(),
                target_type: type_name::<T>(),
            })
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("definitions", &self.definitions.len())
            .finish()
    }
}
