use serde::Deserialize;

use super::types::ProxyEntry;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("proxy payload is empty")]
    EmptyPayload,
    #[error("proxy payload parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ProxyPayload {
    items: Vec<ProxyEntry>,
}

pub fn parse_proxy_payload(raw: &[u8]) -> Result<Vec<ProxyEntry>, PayloadError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(PayloadError::EmptyPayload);
    }
    let payload: ProxyPayload = serde_json::from_slice(trimmed)?;
    Ok(payload.items)
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
