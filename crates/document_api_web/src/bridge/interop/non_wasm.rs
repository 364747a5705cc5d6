use super::*;

fn unsupported() -> ApiError {
    ApiError::Transport("browser fetch is only available when compiled for wasm32".to_string())
}

pub async fn post_json(
    _url: &str,
    _body: &str,
    _cancel: Option<&CancellationToken>,
) -> Result<HttpReply, ApiError> {
    Err(unsupported())
}
