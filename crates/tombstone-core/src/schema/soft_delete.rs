use super::{Field, FieldId, TagSettings, TimeUnit};

/// How a field records soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftDelete {
    /// The field is a two-state indicator. Takes priority over the time unit
    /// for the field itself.
    pub flag: bool,

    /// Numeric encoding used for timestamp values, including the companion
    /// field when that one is numeric.
    pub unit: TimeUnit,

    /// A second field stamped with the deletion instant.
    pub companion: Option<FieldId>,
}

impl SoftDelete {
    /// Resolves the marking configuration of `field` from its `softDelete`
    /// tag, looking the companion field up among `fields`.
    ///
    /// An unknown companion name is not an error: the companion is dropped.
    pub fn resolve(field: &Field, fields: &[Field]) -> SoftDelete {
        let settings = field
            .tags
            .get("SOFTDELETE")
            .map(|raw| TagSettings::parse(raw, ','))
            .unwrap_or_default();

        let companion = settings
            .get("DELETEDATFIELD")
            .or_else(|| settings.get("DELETEDATETIMEFIELD"))
            .filter(|name| !name.is_empty())
            .and_then(|name| {
                let found = fields
                    .iter()
                    .find(|other| other.name == name)
                    .or_else(|| fields.iter().find(|other| other.column == name))
                    .filter(|other| other.id != field.id);

                if found.is_none() {
                    tracing::warn!(
                        field = %field.name,
                        companion = %name,
                        "companion field not found; deletion will not stamp it"
                    );
                }

                found.map(|other| other.id)
            });

        SoftDelete {
            flag: settings.contains("FLAG"),
            unit: TimeUnit::from_settings(&settings),
            companion,
        }
    }
}
