use crate::model::{self, ModelMesh};
use landing_core::{AssetError, AssetState};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(path: &str, reason: impl Into<String>) -> AssetError {
    AssetError::Fetch {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// GET `path` relative to the page and return the body as text.
pub async fn fetch_text(path: &str) -> Result<String, AssetError> {
    let window = web::window().ok_or_else(|| fetch_error(path, "no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_error(path, format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| fetch_error(path, format!("not a Response: {:?}", e)))?;
    if !resp.ok() {
        return Err(fetch_error(path, format!("HTTP {}", resp.status())));
    }
    let text_promise: js_sys::Promise = resp
        .text()
        .map_err(|e| fetch_error(path, format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| fetch_error(path, format!("{:?}", e)))?;
    text.as_string()
        .ok_or_else(|| fetch_error(path, "body is not text"))
}

/// Fetch the material library first, then the geometry that references it.
pub async fn load_model(obj_path: &str, mtl_path: &str) -> AssetState<ModelMesh> {
    let result = async {
        let mtl_src = fetch_text(mtl_path).await?;
        let materials = model::parse_mtl(mtl_path, &mtl_src)?;
        let obj_src = fetch_text(obj_path).await?;
        model::parse_obj(obj_path, &obj_src, &materials)
    }
    .await;
    match &result {
        Ok(mesh) => log::info!(
            "[model] loaded {} triangles from {}",
            mesh.vertices.len() / 3,
            obj_path
        ),
        Err(e) => log::error!("[model] {e}"),
    }
    result.into()
}
