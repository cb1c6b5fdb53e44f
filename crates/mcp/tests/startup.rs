// Process-level checks of the render-mcp binary

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_render-mcp");

#[test]
fn missing_api_key_exits_with_error() {
    let output = Command::new(BIN)
        .env_remove("RENDER_API_KEY")
        .env_remove("RENDER_API_BASE_URL")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RENDER_API_KEY"), "stderr: {}", stderr);
}

#[test]
fn answers_handshake_on_stdout_only() {
    let mut child = Command::new(BIN)
        .env("RENDER_API_KEY", "rnd_test_key")
        .env("RENDER_API_BASE_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(
            stdin,
            r#"{{"jsonrpc":"2.0","id":1,"method":"initialize","params":{{"protocolVersion":"2024-11-05","capabilities":{{}},"clientInfo":{{"name":"test","version":"0"}}}}}}"#
        )
        .unwrap();
        writeln!(stdin, r#"{{"jsonrpc":"2.0","id":2,"method":"tools/list"}}"#).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["result"]["serverInfo"]["name"], "render");
    assert_eq!(frames[1]["result"]["tools"].as_array().unwrap().len(), 11);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "stderr: {}", stderr);
    assert!(lines[0].contains("Render MCP server running on stdio"));
}
