use super::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, RequestMode, Response};

fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(describe(&err))
}

fn settle_failure(cancel: Option<&CancellationToken>, err: JsValue) -> ApiError {
    if cancel.map(CancellationToken::is_cancelled).unwrap_or(false) {
        ApiError::Cancelled
    } else {
        transport(err)
    }
}

pub async fn post_json(
    url: &str,
    body: &str,
    cancel: Option<&CancellationToken>,
) -> Result<HttpReply, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("window is unavailable".to_string()))?;

    let headers = Headers::new().map_err(transport)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    if let Some(token) = cancel {
        let controller = AbortController::new().map_err(transport)?;
        init.set_signal(Some(&controller.signal()));
        token.on_cancel(move || controller.abort());
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| settle_failure(cancel, err))?;
    let response: Response = response.dyn_into().map_err(transport)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(|err| settle_failure(cancel, err))?;

    if cancel.map(CancellationToken::is_cancelled).unwrap_or(false) {
        return Err(ApiError::Cancelled);
    }

    Ok(HttpReply {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}
