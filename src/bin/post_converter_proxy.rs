/// API Gatewayプロキシイベント Lambdaエントリポイント
///
/// APIGatewayProxyRequestを直接受け取り、APIGatewayProxyResponseを返す。
/// ボディ以外のフィールドは使用しない。
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use post_converter::application::PostHandler;
use post_converter::infrastructure::{init_logging, into_proxy_response, proxy_request_body};
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("POSTデータ変換Lambda関数（プロキシイベント）を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. プロキシイベントからボディを取り出す
/// 2. PostHandlerで変換・ログ出力
/// 3. 成功時は200、変換失敗時はエラーメッセージ付きの500を返却
async fn handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);

    let response = span.in_scope(|| {
        let response = PostHandler::new().handle(proxy_request_body(&event.payload));
        info!(status_code = response.status_code, "レスポンス送信");
        response
    });

    Ok(into_proxy_response(response))
}
