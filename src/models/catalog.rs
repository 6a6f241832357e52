use serde::{Deserialize, Serialize};

/// A practice area offered by the firm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
}

/// A lawyer who can be requested by name on the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

/// The services and team lists the intake form resolves display names from.
///
/// Loaded once at startup; intake operations take a snapshot by reference so
/// name resolution stays a pure lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub team: Vec<TeamMember>,
}

impl Catalog {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(s)?;
        for service in &catalog.services {
            if service.id.trim().is_empty() || service.name.trim().is_empty() {
                anyhow::bail!("catalog service with empty id or name");
            }
        }
        for member in &catalog.team {
            if member.id.trim().is_empty() || member.name.trim().is_empty() {
                anyhow::bail!("catalog team member with empty id or name");
            }
        }
        Ok(catalog)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read catalog file {path}: {e}"))?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{
            "services": [{"id": "1", "name": "Family Law"}],
            "team": [{"id": "7", "name": "Amara Okafor"}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.services.len(), 1);
        assert_eq!(catalog.team[0].name, "Amara Okafor");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn test_rejects_blank_entries() {
        let json = r#"{"services": [{"id": "", "name": "Family Law"}], "team": []}"#;
        assert!(Catalog::from_json(json).is_err());
    }
}
