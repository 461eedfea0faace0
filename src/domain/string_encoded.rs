// 文字列エンコードされたスカラー値のデシリアライズ
//
// API Gateway経由のPOSTデータは整数・真偽値もJSON文字列で送られてくるため、
// `#[serde(deserialize_with = ...)]` で文字列からネイティブ型へ変換する。
// JSONの数値・真偽値がそのまま来た場合はエラーとし、nullはゼロ値として扱う。

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// 文字列エンコードされた整数（例: `"42"`）をi64として読み込む
pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(0);
    };

    parse_i64(&text)
        .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&text), &"a string-encoded integer"))
}

/// 文字列エンコードされた真偽値（`"true"` / `"false"`）をboolとして読み込む
pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(false);
    };

    parse_bool(&text).ok_or_else(|| {
        D::Error::invalid_value(Unexpected::Str(&text), &"a string-encoded boolean")
    })
}

/// プレーンな文字列を読み込む（nullは空文字列）
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 10進数の整数文字列をi64に変換する
///
/// 先頭は `-` か数字のみ。`"+1"`、`"1.0"`、前後の空白などは拒否する。
/// `"007"` のような先頭ゼロは許可する。i64の範囲外は`None`。
pub fn parse_i64(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// `"true"` / `"false"` の厳密一致のみ受け付ける
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
