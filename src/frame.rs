use crate::model::ModelMesh;
use crate::render;
use instant::Instant;
use landing_core::{
    AssetState, Drawable, DrawableId, InputQueue, SceneState, Viewport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot the async model load writes into; the frame tick takes it.
pub type PendingModel = Rc<RefCell<Option<AssetState<ModelMesh>>>>;

pub struct FrameContext {
    pub scene: SceneState,
    pub queue: Rc<RefCell<InputQueue>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub pending_model: PendingModel,
    pub start: Instant,
    pub next_drawable: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.adopt_loaded_model();

        // Input gathered since the last frame, in arrival order.
        let events = self.queue.borrow_mut().drain();
        for le in self.scene.apply_all(events) {
            log::debug!("[scene] {:?}", le);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.scene.set_viewport(Viewport::new(w as f32, h as f32));
        let snapshot = self.scene.tick(self.start.elapsed().as_secs_f32());

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn adopt_loaded_model(&mut self) {
        let Some(state) = self.pending_model.borrow_mut().take() else {
            return;
        };
        let scale = self.scene.config().model.scale;
        let gpu = &mut self.gpu;
        let next_drawable = &mut self.next_drawable;
        let drawable = state.map(|mesh| {
            if let Some(g) = gpu {
                g.upload_model(&mesh);
            }
            *next_drawable += 1;
            Drawable {
                id: DrawableId(*next_drawable),
                bounds: mesh.bounds,
                scale,
            }
        });
        self.scene.set_model(drawable);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneState,
) -> Option<render::GpuState> {
    let config = scene.config();
    match render::GpuState::new(canvas, &config.lighting, &config.stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to a running requestAnimationFrame loop. Cancelling (or dropping)
/// stops scheduling and releases the frame closure.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if running_tick.get() {
            request_frame(&tick_clone, &raf_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    FrameLoop {
        running,
        raf_id,
        tick,
    }
}
