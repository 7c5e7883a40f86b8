// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};

/// Host metadata captured alongside a benchmark suite so that saved results
/// stay comparable across machines and commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_cores: usize,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git_commit: String,
    pub git_dirty: bool,
    pub rust_version: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        use sysinfo::System;

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_model = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let (git_commit, git_dirty) = Self::git_info();

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            cpu_model,
            cpu_cores: sys.physical_core_count().unwrap_or(0),
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git_commit,
            git_dirty,
            rust_version: Self::rust_version(),
        }
    }

    fn git_info() -> (String, bool) {
        match git2::Repository::open(".") {
            Ok(repo) => {
                let commit = repo
                    .head()
                    .ok()
                    .and_then(|h| h.peel_to_commit().ok())
                    .map(|c| c.id().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let dirty = repo
                    .statuses(None)
                    .map(|statuses| !statuses.is_empty())
                    .unwrap_or(false);
                (commit, dirty)
            }
            Err(_) => ("unknown".to_string(), false),
        }
    }

    fn rust_version() -> String {
        std::process::Command::new("rustc")
            .arg("--version")
            .output()
            .ok()
            .and_then(|out| String::from_utf8(out.stdout).ok())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn to_string_pretty(&self) -> String {
        format!(
            "Host: {} ({})\nCPU: {} ({} cores, {} threads)\nMemory: {} MB\nCommit: {}{}\nRust: {}",
            self.hostname,
            self.os,
            self.cpu_model,
            self.cpu_cores,
            self.cpu_threads,
            self.total_memory_mb,
            self.git_commit,
            if self.git_dirty { " (dirty)" } else { "" },
            self.rust_version,
        )
    }
}
