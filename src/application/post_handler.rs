/// POSTデータ変換ハンドラー
///
/// API Gatewayから受け取ったボディをPostRequestに変換し、
/// 変換結果をログ出力して固定のレスポンスを返す。
/// 状態を持たないため、同じペイロードには常に同じレスポンスを返す。
use tracing::{info, warn};

use crate::domain::{DecodeError, PostRequest};

/// 変換成功時のレスポンスボディ（呼び出し側が文字列一致で判定しているため変更しないこと）
pub const SUCCESS_MESSAGE: &str = "Success to convert post data to golang struct.";

/// 変換後のレコードをログ出力するときの目印
pub const RECORD_TRACE_MARKER: &str = "This is Request struct in aws lambda";

/// ハンドラーのレスポンス（ステータスコードとボディのみ）
///
/// Lambdaランタイムごとのレスポンス型への変換は
/// `infrastructure::gateway_response` で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// 200 OK + 固定メッセージ
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// 500 + エラーメッセージ
    pub fn decode_failure(err: &DecodeError) -> Self {
        Self {
            status_code: 500,
            body: err.to_string(),
        }
    }
}

/// POSTデータ変換ハンドラー
#[derive(Debug, Default, Clone, Copy)]
pub struct PostHandler;

impl PostHandler {
    /// 新しいハンドラーを作成
    pub fn new() -> Self {
        Self
    }

    /// テキストのボディを処理してレスポンスを生成
    ///
    /// # Arguments
    /// * `raw_body` - POSTされたJSONテキスト
    ///
    /// # Returns
    /// 変換成功時は200、失敗時はエラーメッセージ付きの500
    pub fn handle(&self, raw_body: &str) -> HandlerResponse {
        self.respond(PostRequest::decode(raw_body))
    }

    /// バイト列のボディを処理してレスポンスを生成
    pub fn handle_bytes(&self, raw_body: &[u8]) -> HandlerResponse {
        self.respond(PostRequest::decode_slice(raw_body))
    }

    fn respond(&self, decoded: Result<PostRequest, DecodeError>) -> HandlerResponse {
        let request = match decoded {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "POSTデータの変換に失敗");
                return HandlerResponse::decode_failure(&err);
            }
        };

        // 変換後の構造体をログに出力する
        info!(
            user_id = request.user_id,
            user_name = %request.user_name,
            age = request.age,
            send_push = request.send_push,
            send_email = request.send_email,
            record = ?request,
            "{}",
            RECORD_TRACE_MARKER
        );

        HandlerResponse::success()
    }
}
