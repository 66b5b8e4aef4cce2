//! Static table of model requirement profiles.

/// Named minimum-resource thresholds for a model class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementProfile {
    /// Human-readable model name.
    pub name: &'static str,
    /// Minimum available RAM in GB.
    pub ram_gb: f64,
    /// Minimum VRAM in GB.
    pub vram_gb: f64,
    /// Minimum free disk space in GB.
    pub disk_gb: f64,
}

/// The profile table, keyed by model identifier.
pub const PROFILES: &[(&str, RequirementProfile)] = &[
    (
        "flux-dev",
        RequirementProfile {
            name: "FLUX Dev",
            ram_gb: 16.0,
            vram_gb: 12.0,
            disk_gb: 24.0,
        },
    ),
    (
        "flux-schnell",
        RequirementProfile {
            name: "FLUX Schnell",
            ram_gb: 16.0,
            vram_gb: 12.0,
            disk_gb: 24.0,
        },
    ),
    (
        "sdxl",
        RequirementProfile {
            name: "SDXL",
            ram_gb: 16.0,
            vram_gb: 8.0,
            disk_gb: 7.0,
        },
    ),
    (
        "sd15",
        RequirementProfile {
            name: "SD 1.5",
            ram_gb: 8.0,
            vram_gb: 4.0,
            disk_gb: 4.0,
        },
    ),
    (
        "sd21",
        RequirementProfile {
            name: "SD 2.1",
            ram_gb: 8.0,
            vram_gb: 6.0,
            disk_gb: 5.0,
        },
    ),
];

/// Look up a profile by model identifier.
pub fn profile(profile_id: &str) -> Option<&'static RequirementProfile> {
    PROFILES
        .iter()
        .find(|(id, _)| *id == profile_id)
        .map(|(_, p)| p)
}

/// All known profile identifiers, in table order.
pub fn profile_ids() -> Vec<&'static str> {
    PROFILES.iter().map(|(id, _)| *id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profile_lookup() {
        let sdxl = profile("sdxl").unwrap();
        assert_eq!(sdxl.name, "SDXL");
        assert_eq!(sdxl.ram_gb, 16.0);
        assert_eq!(sdxl.vram_gb, 8.0);
        assert_eq!(sdxl.disk_gb, 7.0);
    }

    #[test]
    fn unknown_profile_is_none() {
        assert!(profile("gpt-neo").is_none());
    }

    #[test]
    fn profile_ids_in_table_order() {
        assert_eq!(
            profile_ids(),
            vec!["flux-dev", "flux-schnell", "sdxl", "sd15", "sd21"]
        );
    }
}
