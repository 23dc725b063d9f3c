use statbot::collectors::collector::collect_system_report;
use statbot::config::AppConfig;
use statbot::models::StatSources;
use statbot::renderer::widgets;
use statbot::settings::{check_settings_file, Settings, SettingsStatus};
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn report_from_fixture_sources() {
    let meminfo = fixture("MemTotal:       16777216 kB\nMemFree: 1 kB\nMemAvailable:    8388608 kB\n");
    let stat = fixture("cpu  100 0 100 800 0 0 0\ncpu0 100 0 100 800 0 0 0\n");
    let uptime = fixture("90000.42 12345.00\n");

    let sources = StatSources {
        meminfo: meminfo.path().to_path_buf(),
        stat: stat.path().to_path_buf(),
        uptime: uptime.path().to_path_buf(),
    };

    let report = collect_system_report(&sources).await;
    let table = widgets::render_system_table(&report);

    assert!(table.contains("8.00 GB / 16.00 GB"));
    // The fixture never advances, so the one-second window sees no ticks.
    assert!(table.contains("0.00%"));
    assert!(table.contains("01d:01h:00m:00s"));
    // Busy 200 of 1000 ticks since boot, taken from the same sample.
    assert_eq!(report.cpu_since_boot, 20.0);

    // Whatever df does on this host, the disk block renders as text.
    let disks = widgets::render_disk_table(&report.disks);
    assert!(!disks.is_empty());
}

#[tokio::test]
async fn report_survives_missing_sources() {
    let dir = TempDir::new().unwrap();
    let sources = StatSources {
        meminfo: dir.path().join("meminfo"),
        stat: dir.path().join("stat"),
        uptime: dir.path().join("uptime"),
    };

    let report = collect_system_report(&sources).await;
    let table = widgets::render_system_table(&report);

    assert!(table.contains("Memory Usage"));
    assert!(table.contains("Error: Error reading"));
    assert!(table.contains("0.00%"));
}

#[test]
fn settings_bootstrap_from_config() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("nested").join("settings.json");
    let config_path = dir.path().join("config.ini");
    fs::write(
        &config_path,
        format!("[settings]\nfile = {}\n", settings_path.display()),
    )
    .unwrap();

    let config = AppConfig::from_file(&config_path).unwrap();
    assert_eq!(config.settings.file, settings_path);

    assert_eq!(
        check_settings_file(&config.settings.file).unwrap(),
        SettingsStatus::Created
    );
    assert_eq!(
        check_settings_file(&config.settings.file).unwrap(),
        SettingsStatus::UpToDate
    );
    assert_eq!(Settings::load(&settings_path).unwrap(), Settings::default());
}
