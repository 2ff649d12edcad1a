use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

use super::LenderSchema;

/// On-disk layout of a YAML schema catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    schemas: Vec<LenderSchema>,
}

/// Named lender schemas in conversion order. Starts from the built-ins; YAML
/// entries replace a schema of the same name in place, new names are appended.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    schemas: Vec<LenderSchema>,
}

impl SchemaCatalog {
    /// BLC and MCA only.
    pub fn builtin() -> Self {
        Self {
            schemas: vec![LenderSchema::business_line_of_credit(), LenderSchema::mca()],
        }
    }

    /// Built-ins merged with the catalog at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading schema catalog {}", path.display()))?;
        let catalog = Self::from_yaml_str(&text)
            .with_context(|| format!("parsing schema catalog {}", path.display()))?;
        info!(path = %path.display(), schemas = catalog.schemas.len(), "loaded schema catalog");
        Ok(catalog)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(text)?;
        let mut catalog = Self::builtin();
        for schema in file.schemas {
            schema.validate()?;
            match catalog.schemas.iter_mut().find(|s| s.name == schema.name) {
                Some(slot) => {
                    debug!(name = %schema.name, "overriding schema");
                    *slot = schema;
                }
                None => catalog.schemas.push(schema),
            }
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Result<&LenderSchema> {
        self.schemas.iter().find(|s| s.name == name).ok_or_else(|| {
            anyhow!("unknown schema '{}' (known: {})", name, self.names().join(", "))
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.name.as_str()).collect()
    }

    /// Every schema, built-ins first.
    pub fn schemas(&self) -> &[LenderSchema] {
        &self.schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::EscapeMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EQUIPMENT: &str = r#"
schemas:
  - name: equipment_financing
    label: Equipment Financing
    tag: EQUIP
    table: lenders_equipment_financing
    csv: "Master Huge Capital Lender List - Equipment Financing.csv"
    columns:
      - { header: "Lender Name", column: lender_name }
      - header: "Minimum Credit Requirement"
        column: minimum_credit_requirement
        mode: numeric
    constants:
      - { column: status, value: active }
"#;

    #[test]
    fn builtin_has_blc_and_mca() -> Result<()> {
        let catalog = SchemaCatalog::builtin();
        assert_eq!(catalog.names(), vec!["business_line_of_credit", "mca"]);
        assert_eq!(
            catalog.get("business_line_of_credit")?.table,
            "lenders_business_line_of_credit"
        );
        assert_eq!(catalog.get("mca")?.table, "lenders_mca");
        Ok(())
    }

    #[test]
    fn yaml_extends_builtins() -> Result<()> {
        let catalog = SchemaCatalog::from_yaml_str(EQUIPMENT)?;
        assert_eq!(
            catalog.names(),
            vec!["business_line_of_credit", "mca", "equipment_financing"]
        );
        let equip = catalog.get("equipment_financing")?;
        assert_eq!(equip.key_header, "Lender Name");
        assert_eq!(
            equip.csv_path.as_deref(),
            Some(Path::new("Master Huge Capital Lender List - Equipment Financing.csv"))
        );
        assert_eq!(equip.columns[0].mode, EscapeMode::Text);
        assert_eq!(equip.columns[1].mode, EscapeMode::Numeric);
        assert_eq!(
            equip.column_names(),
            vec!["lender_name", "minimum_credit_requirement", "status"]
        );
        Ok(())
    }

    #[test]
    fn yaml_overrides_builtin_by_name() -> Result<()> {
        let yaml = r#"
schemas:
  - name: mca
    label: MCA
    tag: MCA
    table: lenders_mca_staging
    columns:
      - { header: "Lender Name", column: lender_name }
"#;
        let catalog = SchemaCatalog::from_yaml_str(yaml)?;
        assert_eq!(catalog.names(), vec!["business_line_of_credit", "mca"]);
        assert_eq!(catalog.get("mca")?.table, "lenders_mca_staging");
        Ok(())
    }

    #[test]
    fn duplicate_target_column_is_rejected() {
        let yaml = r#"
schemas:
  - name: broken
    label: Broken
    tag: BRK
    table: lenders_broken
    columns:
      - { header: "Lender Name", column: lender_name }
      - { header: "Name", column: lender_name }
"#;
        let err = SchemaCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("twice"), "{err}");
    }

    #[test]
    fn unknown_schema_lists_known_names() {
        let err = SchemaCatalog::builtin().get("sba").unwrap_err();
        assert!(err.to_string().contains("business_line_of_credit, mca"), "{err}");
    }

    #[test]
    fn load_reads_from_disk() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(EQUIPMENT.as_bytes())?;
        let catalog = SchemaCatalog::load(tmp.path())?;
        assert!(catalog.get("equipment_financing").is_ok());
        Ok(())
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = SchemaCatalog::load("/definitely/not/here.yaml").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
    }
}
