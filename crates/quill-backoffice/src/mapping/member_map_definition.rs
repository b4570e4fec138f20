//! Map definitions for members.

use crate::models::{MemberDisplay, MemberProviderFields};
use quill_core::{Member, MemberProvider, Property, QuillResult, Udi, UdiEntityType};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};

/// Declares how members map to their editing models.
#[derive(Clone)]
pub struct MemberMapDefinition;

impl MemberMapDefinition {
    /// Creates the definition.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn map_display(
        source: &Member,
        target: &mut MemberDisplay,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.udi = Some(Udi::new(UdiEntityType::Member, source.key));
        target.name = source.name.clone();
        target.username = source.username.clone();
        target.email = source.email.clone();
        target.member_type_alias = source.member_type_alias.clone();
        target.is_approved = source.is_approved;
        target.is_locked_out = source.is_locked_out;
        target.last_login_date = source.last_login_date;
        target.provider_fields = Self::map_provider_fields(&source.provider);
        let included: Vec<&Property> = source
            .properties
            .iter()
            .filter(|p| context.is_property_included(&p.alias))
            .collect();
        target.properties = context.map_iter(included)?;
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        Ok(())
    }

    /// Credential fields are editable for locally managed accounts only;
    /// accounts from an external provider are shown read-only.
    fn map_provider_fields(provider: &MemberProvider) -> MemberProviderFields {
        match provider {
            MemberProvider::Local => MemberProviderFields {
                provider_name: "local".to_string(),
                login_editable: true,
                can_reset_password: true,
                external: false,
            },
            MemberProvider::External { provider_name } => MemberProviderFields {
                provider_name: provider_name.clone(),
                login_editable: false,
                can_reset_password: false,
                external: true,
            },
        }
    }
}

impl Default for MemberMapDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDefinition for MemberMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        mapper.define_with_ctor(
            |_source: &Member, _context| MemberDisplay::new(),
            Self::map_display,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_provider_fields_are_editable() {
        let fields = MemberMapDefinition::map_provider_fields(&MemberProvider::Local);
        assert!(fields.login_editable);
        assert!(fields.can_reset_password);
        assert!(!fields.external);
        assert_eq!(fields.provider_name, "local");
    }

    #[test]
    fn test_external_provider_fields_are_read_only() {
        let provider = MemberProvider::External {
            provider_name: "ldap".to_string(),
        };
        let fields = MemberMapDefinition::map_provider_fields(&provider);
        assert!(!fields.login_editable);
        assert!(!fields.can_reset_password);
        assert!(fields.external);
        assert_eq!(fields.provider_name, "ldap");
    }
}
