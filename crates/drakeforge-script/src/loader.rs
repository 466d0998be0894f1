//! RON content loader

use crate::error::Result;
use crate::schema::TaxonomyDef;
use drakeforge_core::{ForgeConfig, Taxonomy};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Taxonomy shipped with the game, in RON form
pub const STANDARD_TAXONOMY: &str = include_str!("../content/taxonomy.ron");

/// Forge tuning shipped with the game, in RON form
pub const STANDARD_FORGE: &str = include_str!("../content/forge.ron");

/// Parse any RON document
pub fn from_ron_str<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(ron::from_str(content)?)
}

/// Read and parse any RON file
pub fn from_ron_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(path.as_ref())?;
    from_ron_str(&content)
}

/// Loaded content, ready to build a forge from
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub taxonomy: Taxonomy,
    pub forge: ForgeConfig,
}

/// Loader for RON content files
///
/// Anything not loaded keeps its built-in default.
#[derive(Debug, Default)]
pub struct Loader {
    taxonomy: Option<Taxonomy>,
    forge: Option<ForgeConfig>,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a taxonomy from a RON string
    pub fn load_taxonomy_str(&mut self, content: &str) -> Result<()> {
        let def: TaxonomyDef = from_ron_str(content)?;
        self.taxonomy = Some(def.into_taxonomy()?);
        Ok(())
    }

    /// Load forge tuning from a RON string
    pub fn load_forge_str(&mut self, content: &str) -> Result<()> {
        self.forge = Some(from_ron_str(content)?);
        Ok(())
    }

    /// Load a single RON file
    ///
    /// Files named `*taxonomy*` are taxonomies, everything else is forge
    /// tuning.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if filename.contains("taxonomy") {
            self.load_taxonomy_str(&content)?;
        } else {
            self.load_forge_str(&content)?;
        }
        tracing::info!(path = %path.display(), "loaded content file");
        Ok(())
    }

    /// Load every `.ron` file in a directory, in name order
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let mut files: Vec<_> = fs::read_dir(path.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        files.retain(|p| p.extension().map(|e| e == "ron").unwrap_or(false));
        files.sort();

        for file in files {
            self.load_file(&file)?;
        }
        Ok(())
    }

    /// Finish loading and return the content
    pub fn finish(self) -> Content {
        Content {
            taxonomy: self.taxonomy.unwrap_or_default(),
            forge: self.forge.unwrap_or_default(),
        }
    }
}

/// Serialize a taxonomy back to pretty RON
pub fn taxonomy_to_ron(taxonomy: &Taxonomy) -> Result<String> {
    let def = TaxonomyDef::from_taxonomy(taxonomy);
    Ok(ron::ser::to_string_pretty(&def, ron::ser::PrettyConfig::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use drakeforge_core::{Element, Rarity};

    #[test]
    fn test_standard_content_matches_builtin() {
        let mut loader = Loader::new();
        loader.load_taxonomy_str(STANDARD_TAXONOMY).unwrap();
        loader.load_forge_str(STANDARD_FORGE).unwrap();

        let content = loader.finish();
        assert_eq!(content.taxonomy, Taxonomy::standard());
        assert_eq!(content.forge, ForgeConfig::default());
    }

    #[test]
    fn test_taxonomy_roundtrip() {
        let encoded = taxonomy_to_ron(&Taxonomy::standard()).unwrap();
        let mut loader = Loader::new();
        loader.load_taxonomy_str(&encoded).unwrap();
        assert_eq!(loader.finish().taxonomy, Taxonomy::standard());
    }

    #[test]
    fn test_duplicate_element_rejected() {
        let mut def: TaxonomyDef = from_ron_str(STANDARD_TAXONOMY).unwrap();
        def.elements.push(def.elements[0].clone());

        let err = def.into_taxonomy().unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition(_)));
    }

    #[test]
    fn test_missing_rarity_rejected() {
        let mut def: TaxonomyDef = from_ron_str(STANDARD_TAXONOMY).unwrap();
        def.rarities.retain(|r| r.rarity != Rarity::Epic);

        let err = def.into_taxonomy().unwrap_err();
        assert!(matches!(err, Error::Core(drakeforge_core::Error::InvalidTaxonomy(_))));
    }

    #[test]
    fn test_element_subset_allowed() {
        let mut def: TaxonomyDef = from_ron_str(STANDARD_TAXONOMY).unwrap();
        def.elements.retain(|e| e.element == Element::Fire);

        let taxonomy = def.into_taxonomy().unwrap();
        assert_eq!(taxonomy.element_pool(), vec![Element::Fire]);
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("taxonomy.ron"), STANDARD_TAXONOMY).unwrap();
        fs::write(dir.path().join("forge.ron"), "(seed: 7)").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut loader = Loader::new();
        loader.load_directory(dir.path()).unwrap();
        let content = loader.finish();

        assert_eq!(content.forge.seed, 7);
        assert_eq!(content.taxonomy.max_level(), 7);
    }

    #[test]
    fn test_bad_ron_is_an_error() {
        let mut loader = Loader::new();
        assert!(matches!(
            loader.load_taxonomy_str("(levels: ["),
            Err(Error::Ron(_))
        ));
    }
}
