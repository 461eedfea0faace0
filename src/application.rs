// アプリケーション層モジュール
pub mod post_handler;

// 再エクスポート
pub use post_handler::{HandlerResponse, PostHandler, SUCCESS_MESSAGE};
