/// POSTデータ変換HTTP Lambdaエントリポイント
///
/// API Gateway (HTTP API / REST API) 経由でPOSTされたJSONボディを
/// PostRequestに変換し、変換結果をログに出力してレスポンスを返す。
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use post_converter::application::PostHandler;
use post_converter::infrastructure::{init_logging, into_http_response};
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("POSTデータ変換Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// ボディのみを使用する（ヘッダー・パス・クエリは見ない）。
/// 変換に失敗しても500レスポンスを返すだけで、Lambdaとしてはエラーにしない。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let request_id = request
        .lambda_context_ref()
        .map(|context| context.request_id.clone())
        .unwrap_or_default();

    let response = info_span!("invocation", request_id = %request_id).in_scope(|| {
        let response = PostHandler::new().handle_bytes(request.body().as_ref());
        info!(status_code = response.status_code, "レスポンス送信");
        response
    });

    let http_response = into_http_response(response)?;
    Ok(http_response)
}
