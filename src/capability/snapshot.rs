//! Hardware probes and the snapshot they produce.

use std::path::Path;
use std::process::Command;

/// Point-in-time record of host hardware capacity.
///
/// Absence of a GPU is represented by `gpu_name` and `vram_gb` both being
/// `None`, never one without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilitySnapshot {
    pub cpu_name: String,
    pub cpu_cores: u32,
    pub ram_total_gb: f64,
    pub ram_available_gb: f64,
    pub gpu_name: Option<String>,
    pub vram_gb: Option<f64>,
    pub disk_free_gb: f64,
}

impl CapabilitySnapshot {
    /// Whether a usable GPU was detected.
    pub fn has_gpu(&self) -> bool {
        self.gpu_name.is_some()
    }
}

/// Produce a fresh snapshot. `disk_root` is the directory whose filesystem
/// is measured for free space (normally the hub root).
///
/// Never fails; each probe that errors leaves its field at a degraded
/// zero/unknown value and logs a warning.
pub fn collect_snapshot(disk_root: &Path) -> CapabilitySnapshot {
    let (cpu_name, cpu_cores) = probe_cpu();
    let (ram_total_gb, ram_available_gb) = probe_ram();
    let (gpu_name, vram_gb) = probe_gpu();
    let disk_free_gb = probe_disk_free(disk_root);

    CapabilitySnapshot {
        cpu_name,
        cpu_cores,
        ram_total_gb,
        ram_available_gb,
        gpu_name,
        vram_gb,
        disk_free_gb,
    }
}

/// Measure a directory's size in GB via `du -sb`. Returns 0.0 when the
/// directory is missing or the probe fails.
pub fn dir_size_gb(path: &Path) -> f64 {
    if !path.exists() {
        return 0.0;
    }
    match run_capture("du", &["-sb".as_ref(), path.as_os_str()]) {
        Some(out) => parse_du_bytes(&out)
            .map(|bytes| bytes as f64 / f64::from(1u32 << 30))
            .unwrap_or(0.0),
        None => {
            tracing::warn!(path = %path.display(), "du probe failed");
            0.0
        }
    }
}

fn probe_cpu() -> (String, u32) {
    let fallback_cores = || {
        std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(0)
    };

    match run_capture("lscpu", &[]) {
        Some(out) => {
            let name = parse_lscpu_field(&out, "Model name")
                .unwrap_or_else(|| "Unknown".to_string());
            let cores = parse_lscpu_field(&out, "CPU(s)")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(fallback_cores);
            (name, cores)
        }
        None => {
            tracing::warn!("lscpu probe failed");
            ("Unknown".to_string(), fallback_cores())
        }
    }
}

fn probe_ram() -> (f64, f64) {
    match run_capture("free", &["-g".as_ref()]) {
        Some(out) => parse_free_gb(&out).unwrap_or_else(|| {
            tracing::warn!("unexpected `free -g` output");
            (0.0, 0.0)
        }),
        None => {
            tracing::warn!("free probe failed");
            (0.0, 0.0)
        }
    }
}

fn probe_gpu() -> (Option<String>, Option<f64>) {
    let out = run_capture(
        "nvidia-smi",
        &[
            "--query-gpu=name,memory.total".as_ref(),
            "--format=csv,noheader".as_ref(),
        ],
    );
    match out.as_deref().and_then(parse_nvidia_smi) {
        Some((name, vram)) => (Some(name), Some(vram)),
        // No NVIDIA GPU (or no driver): both fields stay None together.
        None => (None, None),
    }
}

fn probe_disk_free(root: &Path) -> f64 {
    // Walk up to the nearest existing ancestor so a not-yet-created hub
    // still reports its filesystem's free space.
    let mut target = root;
    while !target.exists() {
        match target.parent() {
            Some(parent) => target = parent,
            None => return 0.0,
        }
    }
    match run_capture("df", &["-Pk".as_ref(), target.as_os_str()]) {
        Some(out) => parse_df_free_gb(&out).unwrap_or(0.0),
        None => {
            tracing::warn!(path = %target.display(), "df probe failed");
            0.0
        }
    }
}

/// Run a command and capture stdout, returning `None` on spawn failure or a
/// non-zero exit.
fn run_capture(program: &str, args: &[&std::ffi::OsStr]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extract the value of a `Field:   value` line from `lscpu` output.
///
/// `CPU(s)` needs an exact field match so it doesn't pick up
/// `NUMA node0 CPU(s)`.
fn parse_lscpu_field(output: &str, field: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() == field {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// Parse total and available GB from `free -g` output.
///
/// The Mem row is `Mem: total used free shared buff/cache available`.
fn parse_free_gb(output: &str) -> Option<(f64, f64)> {
    let mem_line = output.lines().find(|l| l.starts_with("Mem:"))?;
    let fields: Vec<&str> = mem_line.split_whitespace().collect();
    let total: f64 = fields.get(1)?.parse().ok()?;
    let available: f64 = fields.get(6)?.parse().ok()?;
    Some((total, available))
}

/// Parse `name, memory.total` CSV from `nvidia-smi`, e.g.
/// `NVIDIA GeForce RTX 4070, 12282 MiB`. VRAM is converted from MiB to GB.
fn parse_nvidia_smi(output: &str) -> Option<(String, f64)> {
    let line = output.lines().find(|l| !l.trim().is_empty())?;
    let (name, memory) = line.split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let mib: f64 = memory.trim().split_whitespace().next()?.parse().ok()?;
    Some((name.to_string(), mib / 1024.0))
}

/// Parse free space in GB from `df -Pk` output (KiB blocks, POSIX format).
fn parse_df_free_gb(output: &str) -> Option<f64> {
    let data_line = output.lines().nth(1)?;
    let fields: Vec<&str> = data_line.split_whitespace().collect();
    let avail_kib: f64 = fields.get(3)?.parse().ok()?;
    Some(avail_kib / (1024.0 * 1024.0))
}

/// Parse the byte count from `du -sb` output (`<bytes>\t<path>`).
fn parse_du_bytes(output: &str) -> Option<u64> {
    output.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lscpu_field_extraction() {
        let out = "Architecture:  x86_64\n\
                   CPU(s):        16\n\
                   Model name:    AMD Ryzen 7 5800X 8-Core Processor\n\
                   NUMA node0 CPU(s): 0-15\n";
        assert_eq!(
            parse_lscpu_field(out, "Model name").as_deref(),
            Some("AMD Ryzen 7 5800X 8-Core Processor")
        );
        assert_eq!(parse_lscpu_field(out, "CPU(s)").as_deref(), Some("16"));
        assert_eq!(parse_lscpu_field(out, "BogoMIPS"), None);
    }

    #[test]
    fn free_output_parsing() {
        let out = "              total        used        free      shared  buff/cache   available\n\
                   Mem:             31          10           2           0          18          20\n\
                   Swap:             7           0           7\n";
        assert_eq!(parse_free_gb(out), Some((31.0, 20.0)));
    }

    #[test]
    fn free_output_malformed_is_none() {
        assert_eq!(parse_free_gb("garbage\n"), None);
        assert_eq!(parse_free_gb("Mem: 31\n"), None);
    }

    #[test]
    fn nvidia_smi_parsing_converts_mib() {
        let (name, vram) =
            parse_nvidia_smi("NVIDIA GeForce RTX 4070, 12282 MiB\n").unwrap();
        assert_eq!(name, "NVIDIA GeForce RTX 4070");
        assert!((vram - 11.99).abs() < 0.01);
    }

    #[test]
    fn nvidia_smi_missing_is_none() {
        assert_eq!(parse_nvidia_smi(""), None);
        assert_eq!(parse_nvidia_smi("no devices were found\n"), None);
    }

    #[test]
    fn df_free_space_parsing() {
        let out = "Filesystem     1024-blocks      Used Available Capacity Mounted on\n\
                   /dev/nvme0n1p2   498443264 201326592 294967296      41% /\n";
        let gb = parse_df_free_gb(out).unwrap();
        // 294967296 KiB / 1048576 = 281.3027 GB
        assert!((gb - 281.30).abs() < 0.01);
    }

    #[test]
    fn du_bytes_parsing() {
        assert_eq!(parse_du_bytes("5368709120\t/data/ai\n"), Some(5368709120));
        assert_eq!(parse_du_bytes("not a number\n"), None);
    }

    #[test]
    fn snapshot_is_always_producible() {
        // Probes may or may not exist on the test host; either way this
        // must not panic and must keep the GPU fields consistent.
        let snapshot = collect_snapshot(Path::new("/definitely/not/here"));
        assert_eq!(snapshot.gpu_name.is_some(), snapshot.vram_gb.is_some());
        assert!(snapshot.disk_free_gb >= 0.0);
    }

    #[test]
    fn dir_size_of_missing_path_is_zero() {
        assert_eq!(dir_size_gb(Path::new("/definitely/not/here")), 0.0);
    }
}
