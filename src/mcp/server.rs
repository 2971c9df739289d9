//! MCP server - stdio transport

use anyhow::Result;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::protocol::{Request, Response};
use crate::checker::run_checker;
use crate::diagnostics::{format_report, parse_output};
use crate::workspace::find_workspace_root;

/// Run MCP server over stdio
pub fn run_server() -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    eprintln!("tsgo-mcp: server ready");

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let resp = Response::error(None, -32700, &format!("Parse error: {}", e));
                writeln!(stdout, "{}", serde_json::to_string(&resp)?)?;
                stdout.flush()?;
                continue;
            }
        };

        // Validate JSON-RPC version
        if request.jsonrpc != "2.0" {
            let resp = Response::error(
                request.id.clone(),
                -32600,
                &format!(
                    "Invalid JSON-RPC version: expected 2.0, got {}",
                    request.jsonrpc
                ),
            );
            writeln!(stdout, "{}", serde_json::to_string(&resp)?)?;
            stdout.flush()?;
            continue;
        }

        let response = dispatch(&request);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    Ok(())
}

fn dispatch(req: &Request) -> Response {
    match req.method.as_str() {
        "initialize" => handle_initialize(req),
        "initialized" => Response::success(req.id.clone(), serde_json::json!({})),
        "tools/list" => handle_list_tools(req),
        "tools/call" => handle_tool_call(req),
        _ => Response::error(req.id.clone(), -32601, "Method not found"),
    }
}

fn handle_initialize(req: &Request) -> Response {
    Response::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "tsgo-mcp",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_list_tools(req: &Request) -> Response {
    Response::success(
        req.id.clone(),
        serde_json::json!({
            "tools": [
                {
                    "name": "diagnostics",
                    "description": "Get TypeScript diagnostics (type errors) for a file. Automatically detects the project from the file path.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "filePath": {
                                "type": "string",
                                "description": "Absolute path to the TypeScript file to check"
                            }
                        },
                        "required": ["filePath"]
                    }
                }
            ]
        }),
    )
}

fn handle_tool_call(req: &Request) -> Response {
    let name = req
        .params
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    let args = req.params.get("arguments").cloned().unwrap_or_default();
    let file_path = args.get("filePath").and_then(|v| v.as_str()).unwrap_or("");

    if file_path.is_empty() {
        return Response::tool_error(req.id.clone(), "Error: filePath is required");
    }
    if name != "diagnostics" {
        return Response::tool_error(req.id.clone(), &format!("Unknown tool: {}", name));
    }

    match get_diagnostics(Path::new(file_path)) {
        Ok(text) => Response::tool_text(req.id.clone(), &text),
        Err(e) => Response::tool_error(req.id.clone(), &format!("Error: {:#}", e)),
    }
}

/// Resolve the workspace for `file_path`, run the checker there, and format
/// the parsed diagnostics
fn get_diagnostics(file_path: &Path) -> Result<String> {
    let workspace = find_workspace_root(file_path);
    eprintln!("tsgo-mcp: running diagnostics in {}", workspace.display());

    let output = run_checker(&workspace)?;
    Ok(format_report(&parse_output(&output)))
}
