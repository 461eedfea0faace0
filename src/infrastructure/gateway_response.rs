// API Gatewayとのリクエスト/レスポンス変換
//
// ハンドラーのHandlerResponseを各Lambdaランタイムのレスポンス型に変換する。
// - lambda_http: `Response<Body>`
// - lambda_runtime + aws_lambda_events: `ApiGatewayProxyResponse`

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body as ProxyBody;
use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::{Body, Response};

use crate::application::HandlerResponse;

/// レスポンスのContent-Type（ボディは成功メッセージかエラーメッセージのプレーンテキスト）
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// lambda_http用のHTTPレスポンスに変換
///
/// # Errors
/// ステータスコードがHTTPとして不正な場合
pub fn into_http_response(
    response: HandlerResponse,
) -> Result<Response<Body>, lambda_http::http::Error> {
    Response::builder()
        .status(response.status_code)
        .header(CONTENT_TYPE, TEXT_CONTENT_TYPE)
        .body(Body::Text(response.body))
}

/// API Gatewayプロキシ統合用のレスポンスに変換
pub fn into_proxy_response(response: HandlerResponse) -> ApiGatewayProxyResponse {
    let mut proxy_response = ApiGatewayProxyResponse::default();
    proxy_response.status_code = i64::from(response.status_code);
    proxy_response
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
    proxy_response.body = Some(ProxyBody::Text(response.body));
    proxy_response
}

/// プロキシイベントからボディを取り出す（ボディなしは空文字列）
///
/// ヘッダー・パス・クエリは使用しない。
pub fn proxy_request_body(request: &ApiGatewayProxyRequest) -> &str {
    request.body.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SUCCESS_MESSAGE;

    #[test]
    fn test_into_http_response_success() {
        let response = into_http_response(HandlerResponse::success()).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        match response.body() {
            Body::Text(text) => assert_eq!(text, SUCCESS_MESSAGE),
            _ => panic!("予期しないBody型"),
        }
    }

    #[test]
    fn test_into_http_response_failure() {
        let handler_response = HandlerResponse {
            status_code: 500,
            body: "invalid JSON payload: EOF while parsing a value at line 1 column 0".to_string(),
        };

        let response = into_http_response(handler_response.clone()).unwrap();

        assert_eq!(response.status(), 500);
        match response.body() {
            Body::Text(text) => assert_eq!(text, &handler_response.body),
            _ => panic!("予期しないBody型"),
        }
    }

    #[test]
    fn test_into_http_response_rejects_invalid_status() {
        let handler_response = HandlerResponse {
            status_code: 1000,
            body: String::new(),
        };

        assert!(into_http_response(handler_response).is_err());
    }

    #[test]
    fn test_into_proxy_response_success() {
        let response = into_proxy_response(HandlerResponse::success());

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        match response.body {
            Some(ProxyBody::Text(text)) => assert_eq!(text, SUCCESS_MESSAGE),
            other => panic!("予期しないBody型: {other:?}"),
        }
    }

    #[test]
    fn test_into_proxy_response_failure() {
        let response = into_proxy_response(HandlerResponse {
            status_code: 500,
            body: "boom".to_string(),
        });

        assert_eq!(response.status_code, 500);
        assert!(matches!(response.body, Some(ProxyBody::Text(ref text)) if text == "boom"));
    }

    #[test]
    fn test_proxy_request_body() {
        let mut request = ApiGatewayProxyRequest::default();
        assert_eq!(proxy_request_body(&request), "");

        request.body = Some(r#"{"user_id":"1"}"#.to_string());
        assert_eq!(proxy_request_body(&request), r#"{"user_id":"1"}"#);
    }
}
