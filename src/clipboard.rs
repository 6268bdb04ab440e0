// src/clipboard.rs
use anyhow::{anyhow, Result};
use dioxus::prelude::*;

const COPY_SCRIPT: &str = r#"
    const text = await dioxus.recv();
    await navigator.clipboard.writeText(text);
    return true;
"#;

/// Copies text to the system clipboard through the webview.
///
/// # Errors
/// Returns error if the webview refuses the write (no focus, no permission).
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
    let eval = document::eval(COPY_SCRIPT);
    eval.send(text)
        .map_err(|e| anyhow!("clipboard handoff failed: {e:?}"))?;
    eval.join::<bool>()
        .await
        .map_err(|e| anyhow!("clipboard write failed: {e:?}"))?;
    Ok(())
}
