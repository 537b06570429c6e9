//! Galaxy content files.
//!
//! ```toml
//! [[system]]
//! id = 20
//! name = "Dau"
//! [system.wormholes]
//! arta = "B-9"
//! ```
//!
//! Each wormhole entry also declares the jump it serves, so adjacency comes
//! from the wormhole tables alone and one-sided tables fail validation.

use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::{GalaxyBuilder, GalaxyGraph};
use crate::models::errors::NavResult;
use crate::models::sector::parse_grid_ref;

#[derive(Debug, Deserialize)]
struct GalaxyFile {
    #[serde(rename = "system", default)]
    systems: Vec<SystemRecord>,
}

#[derive(Debug, Deserialize)]
struct SystemRecord {
    id: u16,
    name: String,
    /// Neighbour name -> grid reference of the wormhole in this system.
    #[serde(default)]
    wormholes: BTreeMap<String, String>,
}

impl GalaxyGraph {
    pub fn from_toml_str(content: &str) -> NavResult<Self> {
        let file: GalaxyFile = toml::from_str(content)?;

        let mut builder = GalaxyBuilder::new();
        for record in &file.systems {
            builder.system(record.id, &record.name);
        }
        for record in &file.systems {
            for (to, grid_ref) in &record.wormholes {
                builder
                    .jump(&record.name, to)
                    .wormhole(&record.name, to, parse_grid_ref(grid_ref)?);
            }
        }
        builder.build()
    }

    pub fn load(path: &Path) -> NavResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let galaxy = Self::from_toml_str(&content)?;
        info!(
            "loaded galaxy from {}: {} systems, {} jumps",
            path.display(),
            galaxy.len(),
            galaxy.jump_count()
        );
        Ok(galaxy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::NavError;
    use crate::models::point::Point;

    const TRIANGLE: &str = r#"
[[system]]
id = 2
name = "Alpha Centauri"
[system.wormholes]
beta = "P-8"
gamma = "H-16"

[[system]]
id = 3
name = "Beta"
[system.wormholes]
alpha = "A-8"
gamma = "H-1"

[[system]]
id = 4
name = "Gamma"
[system.wormholes]
alpha = "A-1"
beta = "P-1"
"#;

    #[test]
    fn loads_triangle() {
        let galaxy = GalaxyGraph::from_toml_str(TRIANGLE).unwrap();
        assert_eq!(galaxy.len(), 3);
        assert_eq!(galaxy.jump_count(), 3);

        let alpha = galaxy.system("alpha").unwrap();
        let beta = galaxy.system("beta").unwrap();
        assert_eq!(galaxy.long_name(alpha), Some("Alpha Centauri"));
        assert_eq!(galaxy.wormhole(alpha, beta), Some(Point::new(15, 8)));
        assert_eq!(galaxy.wormhole(beta, alpha), Some(Point::new(0, 8)));
    }

    #[test]
    fn one_sided_wormhole_table_is_rejected() {
        let content = r#"
[[system]]
id = 2
name = "Alpha"
[system.wormholes]
beta = "P-8"

[[system]]
id = 3
name = "Beta"
"#;
        assert!(matches!(
            GalaxyGraph::from_toml_str(content),
            Err(NavError::InconsistentGalaxy(_))
        ));
    }

    #[test]
    fn bad_grid_reference_is_rejected() {
        let content = r#"
[[system]]
id = 2
name = "Alpha"
[system.wormholes]
beta = "Z-99"

[[system]]
id = 3
name = "Beta"
[system.wormholes]
alpha = "A-1"
"#;
        assert!(matches!(
            GalaxyGraph::from_toml_str(content),
            Err(NavError::InvalidSector(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            GalaxyGraph::from_toml_str("[[system]]\nid = \"two\""),
            Err(NavError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GalaxyGraph::load(Path::new("/nonexistent/galaxy.toml")).unwrap_err();
        assert!(matches!(err, NavError::Io(_)));
    }
}
