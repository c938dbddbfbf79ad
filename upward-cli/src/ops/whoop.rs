//! WHOOP integration commands.

use super::output::{print_json, print_object, OutputFormat};
use super::ui::{print_header, print_hint, print_kv, print_kv_colored, print_success, KvColor};
use upward_core::{ApiClient, DateWindow};

pub async fn connect(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let auth = client.connect_whoop().await?;
    match output {
        OutputFormat::Json => print_json(&auth)?,
        OutputFormat::Table => {
            print_header("🔗 CONNECT WHOOP");
            print_kv_colored("Authorize at", &auth.auth_url, KvColor::Cyan);
            println!();
            print_hint("Open the URL in a browser, then run 'whoop status' to confirm.");
        }
    }
    Ok(())
}

pub async fn status(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let conn = client.check_whoop_status().await?;
    match output {
        OutputFormat::Json => print_json(&conn)?,
        OutputFormat::Table => {
            let (label, color) = if conn.connected {
                ("connected", KvColor::Green)
            } else {
                ("not connected", KvColor::Red)
            };
            print_kv_colored("WHOOP", label, color);
            print_kv("Refresh token", if conn.has_refresh_token { "yes" } else { "no" });
        }
    }
    Ok(())
}

pub async fn sync(client: &ApiClient, days: u32, output: OutputFormat) -> anyhow::Result<()> {
    let result = client.sync_whoop_data(days).await?;
    match output {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            let msg = result["message"].as_str().unwrap_or("WHOOP sync finished");
            print_success(msg);
        }
    }
    Ok(())
}

pub async fn data(
    client: &ApiClient,
    window: DateWindow,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let data = client.get_whoop_data(&window).await?;
    match output {
        OutputFormat::Json => print_json(&data)?,
        OutputFormat::Table => {
            print_header("💓 WHOOP DATA");
            match data.as_array() {
                Some(records) => {
                    for record in records {
                        print_object(record);
                        println!();
                    }
                }
                None => print_object(&data),
            }
        }
    }
    Ok(())
}

pub async fn sync_status(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let status = client.get_whoop_sync_status().await?;
    match output {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Table => {
            print_header("🔄 WHOOP SYNC STATUS");
            print_object(&status);
            println!();
        }
    }
    Ok(())
}
