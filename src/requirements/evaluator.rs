//! Requirement evaluation against a capability snapshot.

use crate::capability::CapabilitySnapshot;

use super::profiles::profile;

/// Outcome of evaluating one profile against one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// True iff `issues` is empty.
    pub meets: bool,
    /// Deficiencies in check order: RAM, then VRAM, then disk.
    pub issues: Vec<String>,
}

impl Verdict {
    fn ok() -> Self {
        Self {
            meets: true,
            issues: Vec::new(),
        }
    }
}

/// Check whether the host meets a model's minimum requirements.
///
/// Unknown profiles are never blocking: they yield a passing verdict with no
/// issues. Thresholds are inclusive — having exactly the required amount
/// passes. Evaluation itself never fails; missing hardware (no GPU) is a
/// reported issue, not an error.
pub fn evaluate(profile_id: &str, snapshot: &CapabilitySnapshot) -> Verdict {
    let Some(req) = profile(profile_id) else {
        return Verdict::ok();
    };

    let mut issues = Vec::new();

    if snapshot.ram_available_gb < req.ram_gb {
        issues.push(format!(
            "RAM: Need {}GB, have {:.1}GB available",
            fmt_required(req.ram_gb),
            snapshot.ram_available_gb
        ));
    }

    match snapshot.vram_gb {
        None => issues.push(format!(
            "GPU: NVIDIA GPU required with {}GB VRAM",
            fmt_required(req.vram_gb)
        )),
        Some(vram) if vram < req.vram_gb => issues.push(format!(
            "VRAM: Need {}GB, have {:.1}GB",
            fmt_required(req.vram_gb),
            vram
        )),
        Some(_) => {}
    }

    if snapshot.disk_free_gb < req.disk_gb {
        issues.push(format!(
            "Disk: Need {}GB free, have {:.1}GB",
            fmt_required(req.disk_gb),
            snapshot.disk_free_gb
        ));
    }

    Verdict {
        meets: issues.is_empty(),
        issues,
    }
}

/// Format a requirement threshold without a trailing `.0` for whole numbers.
fn fmt_required(gb: f64) -> String {
    if gb.fract() == 0.0 {
        format!("{}", gb as u64)
    } else {
        format!("{gb:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ram: f64, gpu: Option<(&str, f64)>, disk: f64) -> CapabilitySnapshot {
        CapabilitySnapshot {
            cpu_name: "Test CPU".into(),
            cpu_cores: 8,
            ram_total_gb: 32.0,
            ram_available_gb: ram,
            gpu_name: gpu.map(|(name, _)| name.to_string()),
            vram_gb: gpu.map(|(_, vram)| vram),
            disk_free_gb: disk,
        }
    }

    #[test]
    fn unknown_profile_never_blocks() {
        let verdict = evaluate("mystery-model", &snapshot(0.0, None, 0.0));
        assert!(verdict.meets);
        assert!(verdict.issues.is_empty());
    }

    #[test]
    fn sdxl_with_too_little_ram() {
        // Spec scenario: sdxl needs {ram:16, vram:8, disk:7}.
        let verdict = evaluate("sdxl", &snapshot(12.0, Some(("X", 8.0)), 10.0));
        assert!(!verdict.meets);
        assert_eq!(
            verdict.issues,
            vec!["RAM: Need 16GB, have 12.0GB available".to_string()]
        );
    }

    #[test]
    fn missing_gpu_is_an_issue_for_every_vram_profile() {
        for id in super::super::profile_ids() {
            let verdict = evaluate(id, &snapshot(64.0, None, 100.0));
            assert!(!verdict.meets, "{id} should fail without a GPU");
            assert!(
                verdict.issues.iter().any(|i| i.contains("GPU")),
                "{id} should mention the GPU requirement"
            );
        }
    }

    #[test]
    fn exact_boundary_values_pass() {
        // Thresholds are inclusive: exactly meeting every minimum passes.
        let verdict = evaluate("sdxl", &snapshot(16.0, Some(("X", 8.0)), 7.0));
        assert!(verdict.meets, "boundary values must pass: {:?}", verdict.issues);
        assert!(verdict.issues.is_empty());
    }

    #[test]
    fn issues_come_in_ram_vram_disk_order() {
        let verdict = evaluate("flux-dev", &snapshot(4.0, Some(("X", 6.0)), 1.0));
        assert!(!verdict.meets);
        assert_eq!(verdict.issues.len(), 3);
        assert!(verdict.issues[0].starts_with("RAM:"));
        assert!(verdict.issues[1].starts_with("VRAM:"));
        assert!(verdict.issues[2].starts_with("Disk:"));
    }

    #[test]
    fn vram_issue_reports_both_sides() {
        let verdict = evaluate("sdxl", &snapshot(32.0, Some(("X", 6.0)), 50.0));
        assert_eq!(verdict.issues, vec!["VRAM: Need 8GB, have 6.0GB".to_string()]);
    }

    #[test]
    fn disk_issue_reports_free_space() {
        let verdict = evaluate("sd15", &snapshot(32.0, Some(("X", 8.0)), 2.5));
        assert_eq!(
            verdict.issues,
            vec!["Disk: Need 4GB free, have 2.5GB".to_string()]
        );
    }

    #[test]
    fn meets_iff_issues_empty() {
        let passing = evaluate("sd15", &snapshot(32.0, Some(("X", 8.0)), 50.0));
        assert!(passing.meets && passing.issues.is_empty());

        let failing = evaluate("sd15", &snapshot(1.0, Some(("X", 8.0)), 50.0));
        assert!(!failing.meets && !failing.issues.is_empty());
    }

    #[test]
    fn boundary_sweep_across_all_profiles() {
        // Every profile passes a snapshot sitting exactly on its minimums.
        for (id, req) in crate::requirements::PROFILES {
            let verdict = evaluate(
                id,
                &snapshot(req.ram_gb, Some(("X", req.vram_gb)), req.disk_gb),
            );
            assert!(verdict.meets, "{id} must pass at its exact minimums");
        }
    }
}
