//! End-to-End CLI Tests for organico
//!
//! Developed by The Organico Team (c)2025

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the organico binary
fn organico() -> Command {
    cargo_bin_cmd!("organico")
}

/// Run `simulate` and parse every JSON line it prints.
fn simulate(steps: &[&str]) -> Vec<serde_json::Value> {
    let output = organico()
        .arg("simulate")
        .args(steps)
        .output()
        .expect("run organico simulate");
    assert!(output.status.success(), "simulate failed: {output:?}");

    String::from_utf8(output.stdout)
        .expect("utf-8 stdout")
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        organico()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("simulate"));
    }

    #[test]
    fn shows_version() {
        organico()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        organico().assert().failure();
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_default_snapshot_to_stdout() {
        organico()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Organic Raw Almonds"))
            .stdout(predicate::str::contains("Green Tea Blend"))
            .stdout(predicate::str::contains("Dried Goji Berries"))
            .stdout(predicate::str::contains(r#"class="cart-badge""#).not());
    }

    #[test]
    fn flags_override_state() {
        organico()
            .args(["render", "--cart", "3", "--subscribed", "--menu-open"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"data-count="3""#))
            .stdout(predicate::str::contains("Thank you for subscribing!"))
            .stdout(predicate::str::contains(r#"class="mobile-menu""#));
    }

    #[test]
    fn writes_snapshot_file() {
        let temp = TempDir::new().expect("tempdir");
        let out = temp.path().join("page.html");

        organico()
            .args(["render", "--email", "a@b.com", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("snapshot written");
        assert!(html.contains(r#"value="a@b.com""#));
    }

    #[test]
    fn loads_state_from_json() {
        let temp = TempDir::new().expect("tempdir");
        let state = temp.path().join("state.json");
        std::fs::write(&state, r#"{"cart_count": 7}"#).expect("write state");

        organico()
            .args(["render", "--state"])
            .arg(&state)
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"data-count="7""#));
    }

    #[test]
    fn rejects_malformed_state() {
        let temp = TempDir::new().expect("tempdir");
        let state = temp.path().join("state.json");
        std::fs::write(&state, "not json").expect("write state");

        organico()
            .args(["render", "--state"])
            .arg(&state)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid view state JSON"));
    }

    #[test]
    fn missing_state_file_fails() {
        organico()
            .args(["render", "--state", "/nonexistent/state.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read state file"));
    }
}

// ============================================
// Data Dump Tests
// ============================================

mod data {
    use super::*;

    #[test]
    fn catalog_table_lists_items_in_order() {
        let output = organico().arg("catalog").output().expect("run catalog");
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let almonds = stdout.find("Organic Raw Almonds").expect("almonds listed");
        let tea = stdout.find("Green Tea Blend").expect("tea listed");
        let goji = stdout.find("Dried Goji Berries").expect("goji listed");
        assert!(almonds < tea && tea < goji);
        assert!(stdout.contains("$12.99"));
    }

    #[test]
    fn catalog_json_has_numeric_prices() {
        let output = organico()
            .args(["catalog", "--json"])
            .output()
            .expect("run catalog");
        assert!(output.status.success());

        let items: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("catalog JSON");
        let items = items.as_array().expect("array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "Organic Raw Almonds");
        assert_eq!(items[0]["price"], 12.99);
        assert_eq!(items[1]["rating"], 4.9);
    }

    #[test]
    fn series_json_has_six_months() {
        let output = organico()
            .args(["series", "--json"])
            .output()
            .expect("run series");
        assert!(output.status.success());

        let series: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("series JSON");
        let series = series.as_array().expect("array");
        assert_eq!(series.len(), 6);
        assert_eq!(series[0]["label"], "Jan");
        assert_eq!(series[5]["value"], 1330);
    }

    #[test]
    fn series_table() {
        organico()
            .arg("series")
            .assert()
            .success()
            .stdout(predicate::str::contains("Jan"))
            .stdout(predicate::str::contains("1290"));
    }
}

// ============================================
// Chart Tests
// ============================================

mod chart {
    use super::*;

    #[test]
    fn writes_svg() {
        let temp = TempDir::new().expect("tempdir");
        let out = temp.path().join("growth.svg");

        organico()
            .args(["chart", "--width", "800", "--height", "300", "--out"])
            .arg(&out)
            .assert()
            .success();

        let svg = std::fs::read_to_string(&out).expect("svg written");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 800 300""#));
        assert!(svg.contains("Jun"));
    }

    #[test]
    fn rejects_tiny_surface() {
        organico()
            .args(["chart", "--width", "0", "--height", "0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("too small"));
    }
}

// ============================================
// Simulation Tests
// ============================================

mod simulation {
    use super::*;

    #[test]
    fn subscribe_banner_hides_after_three_seconds() {
        let frames = simulate(&["add:1", "email:a@b.com", "subscribe", "wait:2999", "wait:1"]);
        assert_eq!(frames.len(), 5);

        assert_eq!(frames[0]["state"]["cart_count"], 1);
        assert_eq!(frames[1]["state"]["email_draft"], "a@b.com");

        let subscribed = &frames[2]["state"];
        assert_eq!(subscribed["email_draft"], "");
        assert_eq!(subscribed["subscribe_success_visible"], true);

        assert_eq!(frames[3]["at_ms"], 2999);
        assert_eq!(frames[3]["state"]["subscribe_success_visible"], true);

        assert_eq!(frames[4]["at_ms"], 3000);
        assert_eq!(frames[4]["state"]["subscribe_success_visible"], false);
    }

    #[test]
    fn resubscribe_restarts_the_timer() {
        let frames = simulate(&[
            "email:a@b.com",
            "subscribe",
            "wait:2000",
            "email:c@d.com",
            "subscribe",
            "wait:1000",
            "wait:2000",
        ]);

        assert_eq!(frames[5]["at_ms"], 3000);
        assert_eq!(frames[5]["state"]["subscribe_success_visible"], true);
        assert_eq!(frames[6]["at_ms"], 5000);
        assert_eq!(frames[6]["state"]["subscribe_success_visible"], false);
    }

    #[test]
    fn empty_subscribe_is_ignored() {
        let frames = simulate(&["subscribe"]);
        assert_eq!(frames[0]["state"]["subscribe_success_visible"], false);
    }

    #[test]
    fn menu_toggles() {
        let frames = simulate(&["menu", "menu"]);
        assert_eq!(frames[0]["state"]["menu_open"], true);
        assert_eq!(frames[1]["state"]["menu_open"], false);
        assert_eq!(frames[1]["step"], "menu");
    }

    #[test]
    fn huge_waits_saturate_the_clock() {
        let steps = vec!["wait:18446744073709551615"; 1100];
        let frames = simulate(&steps);
        assert_eq!(frames.len(), 1100);
    }

    #[test]
    fn unknown_step_fails() {
        organico()
            .args(["simulate", "dance"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("unknown step `dance`"));
    }

    #[test]
    fn bad_delay_fails() {
        organico()
            .args(["simulate", "wait:soon"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid delay"));
    }
}
