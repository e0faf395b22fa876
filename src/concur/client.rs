//! Concur API クライアント

use super::auth::{ClientCredentials, request_access_token};
use crate::error::{ExpenseError, Result};
use crate::report::ReportPayload;
use tracing::{debug, info};

/// Concur API のデフォルトベースURL（US データセンター）
pub const DEFAULT_BASE_URL: &str = "https://us.api.concursolutions.com";

/// レポート作成エンドポイントのパス
const REPORTS_PATH: &str = "/expense/reports/v3/reports";

/// 認証状態
///
/// 未認証 → 認証済み の一方向のみ。トークンの有効期限は追跡しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated { access_token: String },
}

/// Concur APIクライアント
pub struct ConcurClient {
    credentials: ClientCredentials,
    base_url: String,
    state: AuthState,
    http_client: reqwest::Client,
}

impl ConcurClient {
    /// ベースURLを指定してクライアントを作成
    pub fn with_base_url(credentials: ClientCredentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            credentials,
            base_url,
            state: AuthState::Unauthenticated,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// 保持しているアクセストークン
    pub fn access_token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { access_token } => Some(access_token),
            AuthState::Unauthenticated => None,
        }
    }

    /// トークンを取得して保持する
    ///
    /// 失敗した場合は状態を変更しない。
    pub async fn authenticate(&mut self) -> Result<()> {
        let access_token =
            request_access_token(&self.http_client, &self.base_url, &self.credentials).await?;

        info!("Concur の認証に成功しました");
        self.state = AuthState::Authenticated { access_token };
        Ok(())
    }

    /// 経費レポートを作成し、レスポンスのJSONをそのまま返す
    ///
    /// 未認証の場合のみ先に認証する。送信失敗時の再認証は行わない。
    pub async fn post_report(&mut self, report: &ReportPayload) -> Result<serde_json::Value> {
        if self.state == AuthState::Unauthenticated {
            self.authenticate().await?;
        }
        let token = match &self.state {
            AuthState::Authenticated { access_token } => access_token,
            AuthState::Unauthenticated => {
                return Err(ExpenseError::Authentication(
                    "アクセストークンがありません".to_string(),
                ));
            }
        };

        let url = format!("{}{}", self.base_url, REPORTS_PATH);
        debug!(url = %url, entries = report.entries.len(), "経費レポートを送信します");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(report)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExpenseError::Submission {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
