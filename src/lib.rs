#![cfg(target_arch = "wasm32")]
use instant::Instant;
use landing_core::{
    generate_stars, pagehide_tears_down, InputQueue, MountGate, MountTicket, SceneConfig,
    SceneState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod model;
mod render;
mod text;

/// Everything that must be released on teardown: listeners first, then the
/// animation loop.
struct Session {
    _listeners: Vec<dom::ListenerGuard>,
    frame_loop: frame::FrameLoop,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static MOUNT: RefCell<MountGate> = RefCell::new(MountGate::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-landing starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and remove every listener the page registered.
#[wasm_bindgen]
pub fn unmount() {
    // a mount still awaiting the GPU sees this and never installs its session
    MOUNT.with(|m| m.borrow_mut().retire());
    let session = SESSION.with(|s| s.borrow_mut().take());
    if let Some(session) = session {
        session.frame_loop.cancel();
        drop(session);
        log::info!("orbit-landing unmounted");
    }
}

/// Rasterize every label, hand the measured quads to the scene and the
/// bitmaps to the GPU. A label that fails keeps its estimated hit area.
fn prepare_labels(
    document: &web::Document,
    scene: &mut SceneState,
    mut gpu: Option<&mut render::GpuState>,
) {
    let texts: Vec<_> = scene
        .labels()
        .iter()
        .map(|l| (l.id, l.text.clone()))
        .collect();
    for (id, label_text) in texts {
        match text::rasterize_label(document, &label_text) {
            Ok(bitmap) => {
                scene.set_label_rect(id, bitmap.rect);
                if let Some(g) = gpu.as_mut() {
                    g.upload_label(id, &bitmap);
                }
            }
            Err(e) => log::warn!("[labels] '{label_text}' not rasterized: {:?}", e),
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let Some(ticket) = MOUNT.with(|m| m.borrow_mut().begin()) else {
        log::warn!("already mounted");
        return Ok(());
    };
    let mounted = mount(ticket).await;
    if mounted.is_err() {
        MOUNT.with(|m| m.borrow_mut().abandon(ticket));
    }
    mounted
}

async fn mount(ticket: MountTicket) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut listeners = Vec::new();
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    listeners.extend(dom::wire_canvas_resize(&canvas));

    let mut scene = SceneState::new(SceneConfig::default());
    let queue = Rc::new(RefCell::new(InputQueue::default()));
    listeners.extend(events::wire_pointer_input(&canvas, queue.clone()));
    listeners.extend(dom::ListenerGuard::on_window("pagehide", |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !pagehide_tears_down(persisted) {
            log::info!("page cached, keeping session");
            return;
        }
        // teardown drops this listener, so run it after the handler returns
        spawn_local(async { unmount() });
    }));

    let mut gpu = frame::init_gpu(&canvas, &scene).await;
    if !MOUNT.with(|m| m.borrow().is_live(ticket)) {
        log::info!("unmounted while starting, dropping session");
        return Ok(());
    }
    prepare_labels(&document, &mut scene, gpu.as_mut());
    if let Some(g) = &mut gpu {
        g.upload_stars(&generate_stars(&scene.config().stars));
    }

    let pending_model: frame::PendingModel = Rc::new(RefCell::new(None));
    {
        let slot = pending_model.clone();
        let obj_path = scene.config().model.obj_path.clone();
        let mtl_path = scene.config().model.mtl_path.clone();
        spawn_local(async move {
            let state = loader::load_model(&obj_path, &mtl_path).await;
            *slot.borrow_mut() = Some(state);
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        queue,
        gpu,
        canvas,
        pending_model,
        start: Instant::now(),
        next_drawable: 0,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    SESSION.with(|s| {
        *s.borrow_mut() = Some(Session {
            _listeners: listeners,
            frame_loop,
        })
    });
    log::info!("orbit-landing mounted");
    Ok(())
}
