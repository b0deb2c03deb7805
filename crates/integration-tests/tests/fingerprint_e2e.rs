//! Fingerprinting through real child processes
//!
//! Each inspection tool is a small shell script in a temp directory; the
//! runner executes `sh <script> <args>` so the chain sees genuine process
//! output, exit codes and timeouts.

use async_trait::async_trait;
use benchsum_core::application::Fingerprinter;
use benchsum_core::domain::{keys, ExecutionContext};
use benchsum_core::port::host_info::mocks::MockHostInfo;
use benchsum_core::port::{CommandOutput, CommandRunner, ExecutionError};
use benchsum_infra_system::{HostInfoImpl, SubprocessRunner};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const ROOT: &str = "/srv/bench/results";

struct ScriptedTools {
    dir: PathBuf,
    inner: SubprocessRunner,
}

#[async_trait]
impl CommandRunner for ScriptedTools {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecutionError> {
        let script = self.dir.join(program).to_string_lossy().into_owned();
        let mut argv = vec![script.as_str()];
        argv.extend_from_slice(args);
        self.inner.run("sh", &argv).await
    }
}

fn tool(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

fn toolbox(timeout: Duration) -> (TempDir, ScriptedTools) {
    let dir = tempfile::tempdir().unwrap();
    let tools = ScriptedTools {
        dir: dir.path().to_path_buf(),
        inner: SubprocessRunner::new(timeout),
    };
    (dir, tools)
}

fn sata_disk_tools(dir: &Path) {
    tool(
        dir,
        "df",
        r#"if [ "$1" = "-T" ]; then
  echo "Filesystem     Type 1K-blocks      Used Available Use% Mounted on"
  echo "/dev/sda2      ext4 959786032 412345678 498765432  46% /srv"
else
  echo "Filesystem     1K-blocks      Used Available Use% Mounted on"
  echo "/dev/sda2      959786032 412345678 498765432  46% /srv"
fi
"#,
    );
    tool(dir, "sudo", "echo 'sudo: a password is required' >&2\nexit 1\n");
    tool(dir, "lsblk", "echo 'sda  WDC WD40EFRX-68N32N0 1  3.6T'\n");
}

#[tokio::test]
async fn test_failed_privileged_tools_fall_back_to_lsblk() {
    let (dir, tools) = toolbox(Duration::from_secs(5));
    sata_disk_tools(dir.path());
    tool(
        dir.path(),
        "lscpu",
        "echo 'Model name:            Intel(R) Xeon(R) Gold 6338 CPU @ 2.00GHz'\necho 'L3 cache:              48 MiB'\n",
    );

    let fp = Fingerprinter::new(
        Arc::new(tools),
        Arc::new(MockHostInfo::workstation()),
        ExecutionContext::Host,
        ROOT,
    );
    let table = fp.collect().await;

    assert_eq!(table.get(keys::CPU_MODEL), Some("Intel(R) Xeon(R) Gold 6338 CPU @ 2.00GHz"));
    assert_eq!(table.get(keys::L3_CACHE), Some("48 MiB"));
    assert!(!table.contains(keys::MEMORY_TYPE));
    assert_eq!(table.get(keys::FILESYSTEM), Some("ext4"));
    assert_eq!(table.get(keys::DRIVE_MODEL), Some("WDC WD40EFRX-68N32N0"));
    assert_eq!(table.get(keys::DRIVE_TYPE), Some("HDD"));
    assert_eq!(table.get(keys::DRIVE_CAPACITY), Some("3.6T"));
    assert_eq!(table.get(keys::DOCKER), Some("Not detected"));
    assert_eq!(table.get(keys::ENVIRONMENT), Some("Host System"));
}

#[tokio::test]
async fn test_hung_tool_is_abandoned() {
    let (dir, tools) = toolbox(Duration::from_millis(300));
    sata_disk_tools(dir.path());
    tool(dir.path(), "lscpu", "sleep 5\necho 'Model name: never printed'\n");

    let fp = Fingerprinter::new(
        Arc::new(tools),
        Arc::new(MockHostInfo::workstation()),
        ExecutionContext::Host,
        ROOT,
    );
    let started = std::time::Instant::now();
    let table = fp.collect().await;

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(table.get(keys::CPU_MODEL), Some("AMD Ryzen 7 7700X 8-Core Processor"));
    assert_eq!(table.get(keys::DRIVE_MODEL), Some("WDC WD40EFRX-68N32N0"));
}

#[tokio::test]
async fn test_container_identity() {
    let (dir, tools) = toolbox(Duration::from_secs(5));
    sata_disk_tools(dir.path());
    tool(dir.path(), "docker", "echo 'Docker version 27.3.1, build ce12230'\n");
    tool(dir.path(), "hostname", "echo 4f9c2a7e1b3d\n");

    let fp = Fingerprinter::new(
        Arc::new(tools),
        Arc::new(MockHostInfo::workstation()),
        ExecutionContext::Container,
        ROOT,
    );
    let table = fp.collect().await;

    assert_eq!(table.get(keys::DOCKER), Some("Docker version 27.3.1, build ce12230"));
    assert_eq!(table.get(keys::ENVIRONMENT), Some("Inside Docker Container"));
    assert_eq!(table.get(keys::CONTAINER_HOSTNAME), Some("4f9c2a7e1b3d"));
    assert_eq!(table.get(keys::DRIVE_MODEL), Some("WDC WD40EFRX-68N32N0"));
}

#[tokio::test]
async fn test_real_host_info_populates_counts() {
    let (_dir, tools) = toolbox(Duration::from_secs(5));

    let fp = Fingerprinter::new(
        Arc::new(tools),
        Arc::new(HostInfoImpl::new()),
        ExecutionContext::Host,
        ROOT,
    );
    let table = fp.collect().await;

    assert!(table.contains(keys::CPU_THREADS));
    assert!(table.get(keys::MEMORY_TOTAL).is_some_and(|v| v.ends_with(" GB")));
    assert!(table.contains(keys::OS));
    assert_eq!(table.get(keys::DRIVE), Some("Unknown"));
}
