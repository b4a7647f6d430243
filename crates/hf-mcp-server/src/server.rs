use crate::mcp::{initialize_result, Request, Response, ServerInfo, METHOD_NOT_FOUND};
use crate::tools::ToolRegistry;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Run the MCP server on stdio: JSON-RPC in on stdin, responses out on stdout.
pub async fn run(registry: ToolRegistry, info: ServerInfo) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    tracing::info!("MCP server {} ready, reading from stdin", info.name);
    serve(stdin, stdout, &registry, &info).await
}

/// Serve newline-delimited requests from `reader` until EOF.
pub async fn serve<R, W>(
    reader: R,
    mut writer: W,
    registry: &ToolRegistry,
    info: &ServerInfo,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Unparsable request: {e}");
                write_response(&mut writer, &Response::parse_error(format!("Parse error: {e}")))
                    .await?;
                continue;
            }
        };

        if request.is_notification() {
            tracing::debug!("Notification {}", request.method);
            continue;
        }

        let response = handle_request(&request, registry, info).await;
        write_response(&mut writer, &response).await?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

async fn handle_request(req: &Request, registry: &ToolRegistry, info: &ServerInfo) -> Response {
    tracing::debug!("Handling {}", req.method);

    match req.method.as_str() {
        "initialize" => Response::result(req, &initialize_result(info)),
        "ping" => Response::result(req, &json!({})),
        "tools/list" => Response::result(req, &json!({ "tools": registry.definitions() })),
        "tools/call" => {
            let name = req.params.get("name").and_then(Value::as_str).unwrap_or("");
            let arguments = req
                .params
                .get("arguments")
                .cloned()
                .unwrap_or_else(|| json!({}));

            let result = registry.call(name, arguments).await;
            Response::result(req, &result)
        }
        method => {
            tracing::debug!("Unknown method: {}", method);
            Response::error(req, METHOD_NOT_FOUND, format!("Method not found: {method}"))
        }
    }
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    resp: &Response,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = serde_json::to_vec(resp)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn exchange(registry: &ToolRegistry, input: &str) -> Vec<Value> {
        let info = ServerInfo {
            name: "test-server".into(),
            version: "0.0.0".into(),
        };
        let mut output = Vec::new();
        serve(input.as_bytes(), &mut output, registry, &info)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn hydrogen_registry() -> (tempfile::TempDir, ToolRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = ToolRegistry::hydrogen(dir.path());
        (dir, registry)
    }

    #[tokio::test]
    async fn test_initialize_then_notification() {
        let (_dir, registry) = hydrogen_registry();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n"
        );
        let responses = exchange(&registry, input).await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "test-server");
        assert_eq!(responses[0]["result"]["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_ping_and_unknown_method() {
        let (_dir, registry) = hydrogen_registry();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":"a","method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#,
            "\n"
        );
        let responses = exchange(&registry, input).await;

        assert_eq!(responses[0], json!({"jsonrpc": "2.0", "id": "a", "result": {}}));
        assert_eq!(responses[1]["error"]["code"], -32601);
        assert_eq!(responses[1]["error"]["message"], "Method not found: resources/list");
    }

    #[tokio::test]
    async fn test_parse_error_has_null_id() {
        let (_dir, registry) = hydrogen_registry();
        let responses = exchange(&registry, "{not json\n").await;

        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_tools_list_and_unknown_tool() {
        let (_dir, registry) = hydrogen_registry();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
            "\n"
        );
        let responses = exchange(&registry, input).await;

        let names: Vec<&str> = responses[0]["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["scaffoldComponent", "scaffoldRoute", "analyzeProject"]);

        assert_eq!(responses[1]["result"]["isError"], true);
        assert_eq!(responses[1]["result"]["content"][0]["text"], "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_tools_call_scaffolds_into_project_root() {
        let (dir, registry) = hydrogen_registry();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"scaffoldComponent","arguments":{"name":"CartDrawer"}}}"#,
            "\n"
        );
        let responses = exchange(&registry, input).await;

        let result = &responses[0]["result"];
        assert!(result.get("isError").is_none());
        let payload: Value =
            serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(payload["success"], true);
        assert!(dir.path().join("app/components/CartDrawer.tsx").exists());
    }
}
