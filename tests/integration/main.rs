//! Integration tests for php-bundle

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn php_bundle(cache: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("php-bundle");
        cmd.env_remove("PHP_BUNDLE_CACHE_DIR")
            .env("PHP_BUNDLE_CONFIG", cache.path().join("config.toml"))
            .arg("--cache-dir")
            .arg(cache.path());
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("php-bundle")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Hash-gated installer for the PHP runtime"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("php-bundle")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("php-bundle"));
    }

    #[test]
    fn path_prints_executable_without_installing() {
        let cache = TempDir::new().unwrap();
        let expected = cache.path().join("php").join("php.exe");

        php_bundle(&cache)
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));

        assert!(!cache.path().join("php").exists());
    }

    #[test]
    fn install_then_noop() {
        let cache = TempDir::new().unwrap();

        php_bundle(&cache)
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("PHP runtime installed"));

        let dest = cache.path().join("php");
        assert!(dest.join("php.exe").is_file());
        assert!(dest.join("extras").join("cacert.pem").is_file());
        assert!(dest.join("hash").is_file());
        let ini = fs::read_to_string(dest.join("php.ini")).unwrap();
        assert!(ini.contains(&cache.path().display().to_string()));

        php_bundle(&cache)
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("already installed"));
    }

    #[test]
    fn install_force_rewrites_files() {
        let cache = TempDir::new().unwrap();
        php_bundle(&cache).arg("install").assert().success();

        let exe = cache.path().join("php").join("php.exe");
        fs::write(&exe, b"tampered").unwrap();

        php_bundle(&cache)
            .args(["install", "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PHP runtime installed"));

        assert_ne!(fs::read(&exe).unwrap(), b"tampered");
    }

    #[test]
    fn status_json_reports_marker() {
        let cache = TempDir::new().unwrap();

        php_bundle(&cache)
            .args(["status", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"state\": \"missing\""));

        php_bundle(&cache).arg("install").assert().success();

        php_bundle(&cache)
            .args(["status", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"state\": \"current\""))
            .stdout(predicate::str::contains("\"payload_ok\": true"));
    }

    #[test]
    fn status_table_hints_install() {
        let cache = TempDir::new().unwrap();

        php_bundle(&cache)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("PHP Runtime Status"))
            .stdout(predicate::str::contains("php-bundle install"));
    }

    #[test]
    fn clean_removes_runtime() {
        let cache = TempDir::new().unwrap();
        php_bundle(&cache).arg("install").assert().success();

        php_bundle(&cache)
            .args(["clean", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));

        assert!(!cache.path().join("php").exists());
    }

    #[test]
    fn clean_nothing_installed() {
        let cache = TempDir::new().unwrap();

        php_bundle(&cache)
            .args(["clean", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to remove"));
    }

    #[test]
    fn unreadable_marker_fails() {
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(cache.path().join("php").join("hash")).unwrap();

        php_bundle(&cache)
            .arg("install")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read install marker"));
    }

    #[test]
    fn invalid_config_fails() {
        let cache = TempDir::new().unwrap();
        fs::write(cache.path().join("config.toml"), "[cache\n").unwrap();

        php_bundle(&cache)
            .arg("path")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn config_supplies_cache_dir() {
        let cache = TempDir::new().unwrap();
        let configured = cache.path().join("from-config");
        fs::write(
            cache.path().join("config.toml"),
            format!("[cache]\ndir = {:?}\n", configured.display().to_string()),
        )
        .unwrap();

        cargo_bin_cmd!("php-bundle")
            .env_remove("PHP_BUNDLE_CACHE_DIR")
            .env("PHP_BUNDLE_CONFIG", cache.path().join("config.toml"))
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                configured.join("php").join("php.exe").display().to_string(),
            ));
    }
}
