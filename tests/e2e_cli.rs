
use std::ffi::OsStr;
use std::process::{Command, Output};

use support_http::{closed_port_url, spawn_status_server};

fn run_vuload<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_vuload_with_env(args, &[])
}

fn run_vuload_with_env<I, S>(args: I, envs: &[(&str, &str)]) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = option_env!("CARGO_BIN_EXE_vuload")
        .ok_or_else(|| "CARGO_BIN_EXE_vuload missing at compile time.".to_owned())?;
    Command::new(bin)
        .args(args)
        .env("VULOAD_LOG", "error")
        .env_remove("VULOAD_URL")
        .env_remove("VULOAD_CONFIG")
        .env_remove("NO_COLOR")
        .envs(envs.iter().copied())
        .output()
        .map_err(|err| format!("run vuload failed: {}", err))
}

fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_cli_json_summary_and_file_sink() -> Result<(), String> {
    let (url, server) = spawn_status_server(200)?;
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("summary.json");
    let path_arg = path.to_string_lossy().into_owned();

    let output = run_vuload([
        "-u",
        url.as_str(),
        "-c",
        "2",
        "-r",
        "4",
        "-t",
        "1",
        "--test-id",
        "cli-json",
        "--output-format",
        "json",
        "--summary-file",
        path_arg.as_str(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout)
        .map_err(|err| format!("stdout is not JSON ({}): {}", err, describe(&output)))?;
    let total = printed
        .get("total_requests")
        .and_then(serde_json::Value::as_u64)
        .ok_or("total_requests missing")?;
    if !(6..=10).contains(&total) || total != server.hits() {
        return Err(format!("Unexpected totals: {}", describe(&output)));
    }
    if printed.get("test_id").and_then(serde_json::Value::as_str) != Some("cli-json") {
        return Err(format!("test_id missing: {}", describe(&output)));
    }

    let written = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
    let written: serde_json::Value =
        serde_json::from_str(&written).map_err(|err| err.to_string())?;
    if written != printed {
        return Err("Summary file differs from printed summary".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_cli_text_summary_reports_failures() -> Result<(), String> {
    let url = closed_port_url()?;

    let output = run_vuload(["-u", url.as_str(), "-r", "2", "-t", "1"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Successful: 0") || !stdout.contains("TPS: 0.00") {
        return Err(format!("Unexpected summary: {}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_cli_rejects_invalid_config() -> Result<(), String> {
    let cases: [&[&str]; 3] = [
        &["-u", "ftp://localhost/", "-t", "1"],
        &["-u", "http://localhost/", "-c", "0"],
        &["-u", "http://localhost/", "-r", "-1"],
    ];
    for args in cases {
        let output = run_vuload(args)?;
        if output.status.success() {
            return Err(format!("{:?} should fail: {}", args, describe(&output)));
        }
        if !output.stdout.is_empty() {
            return Err(format!("No summary expected: {}", describe(&output)));
        }
    }
    Ok(())
}

#[test]
fn e2e_cli_accepts_numeric_no_color_env() -> Result<(), String> {
    let (url, server) = spawn_status_server(200)?;

    let output = run_vuload_with_env(
        ["-u", url.as_str(), "-r", "2", "-t", "1"],
        &[("NO_COLOR", "1")],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if server.hits() == 0 {
        return Err(format!("No requests were sent: {}", describe(&output)));
    }
    Ok(())
}
