//! Concur OAuth2 認証処理 (refresh_token グラント)

use crate::error::{ExpenseError, Result};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// トークンエンドポイントのパス
const TOKEN_PATH: &str = "/oauth2/v0/token";

/// 起動時に渡されるクライアント認証情報
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// シークレットとリフレッシュトークンはログに出さない
impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// アクセストークンレスポンス
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// リフレッシュトークンでアクセストークンを取得
pub async fn request_access_token(
    http_client: &reqwest::Client,
    base_url: &str,
    credentials: &ClientCredentials,
) -> Result<String> {
    let token_url = format!("{}{}", base_url, TOKEN_PATH);
    debug!(url = %token_url, client_id = %credentials.client_id, "アクセストークンを要求します");

    let response = http_client
        .post(&token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ExpenseError::Authentication(format!(
            "トークンエンドポイントが HTTP {} を返しました: {}",
            status.as_u16(),
            error_text
        )));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        ExpenseError::Authentication(format!("トークンレスポンスのパースに失敗: {}", e))
    })?;

    match token_response.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ExpenseError::Authentication(
            "トークンレスポンスに access_token がありません".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = ClientCredentials::new("my-client", "s3cret", "refresh-abc");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("my-client"));
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("refresh-abc"));
    }
}
