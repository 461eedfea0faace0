// POSTリクエストのドメインモデル
//
// API GatewayからPOSTされるJSONテキストを型付きの構造体に変換する。
// 全フィールドがJSON文字列でエンコードされている前提で、
// 整数・真偽値は文字列からパースする。

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::string_encoded::{deserialize_bool, deserialize_i64, deserialize_string};

/// POSTされてくるJSONデータを表す構造体
///
/// ペイロードに存在しないフィールドはゼロ値（0、空文字列、false）になる。
/// キーは大文字小文字を区別して完全一致で照合する（`"USER_ID"` は `user_id` にならない）。
/// 一致しないキーは未知のキーとして無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    /// ユーザーID（`"42"` のような文字列エンコード整数）
    #[serde(deserialize_with = "deserialize_i64")]
    pub user_id: i64,

    /// ユーザー名
    #[serde(deserialize_with = "deserialize_string")]
    pub user_name: String,

    /// 年齢（文字列エンコード整数）
    #[serde(deserialize_with = "deserialize_i64")]
    pub age: i64,

    /// プッシュ通知を送るか（`"true"` / `"false"`）
    #[serde(deserialize_with = "deserialize_bool")]
    pub send_push: bool,

    /// メール通知を送るか（`"true"` / `"false"`）
    #[serde(deserialize_with = "deserialize_bool")]
    pub send_email: bool,
}

/// ペイロードのデコードエラー
///
/// どのバリアントもレスポンス上は区別しない（すべて500）。
/// バリアントはログでの原因特定用。
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSONとしてパースできない
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// JSONとしては正しいがオブジェクトではない
    #[error("payload must be a JSON object, got {0}")]
    NotObject(&'static str),

    /// 存在するフィールドの値が宣言された型に変換できない
    #[error("invalid request field: {0}")]
    InvalidField(#[source] serde_json::Error),
}

impl PostRequest {
    /// JSONテキストをPostRequestに変換
    ///
    /// # 例
    /// ```
    /// use post_converter::domain::PostRequest;
    ///
    /// let request = PostRequest::decode(r#"{"user_id":"42","send_push":"true"}"#).unwrap();
    /// assert_eq!(request.user_id, 42);
    /// assert!(request.send_push);
    /// assert_eq!(request.user_name, "");
    /// ```
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(raw).map_err(DecodeError::InvalidJson)?;
        Self::from_json_value(value)
    }

    /// バイト列のペイロードをPostRequestに変換
    ///
    /// API Gatewayがバイナリとして渡してきたボディ用。UTF-8でない場合はInvalidJson。
    pub fn decode_slice(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw).map_err(DecodeError::InvalidJson)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: Value) -> Result<Self, DecodeError> {
        // 構造体は配列からもデシリアライズできてしまうため、先にオブジェクトであることを確認する
        if !value.is_object() {
            return Err(DecodeError::NotObject(json_kind(&value)));
        }

        serde_json::from_value(value).map_err(DecodeError::InvalidField)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
