use crate::dom::{self, ListenerGuard};
use glam::Vec2;
use landing_core::{InputEvent, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Register the page's pointer and wheel listeners. Each handler only pushes
/// an [`InputEvent`]; the frame tick applies them. The returned guards keep
/// the listeners alive and remove them when dropped.
pub fn wire_pointer_input(
    canvas: &web::HtmlCanvasElement,
    queue: Rc<RefCell<InputQueue>>,
) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();

    // Parallax follows the pointer anywhere in the window.
    let q = queue.clone();
    guards.extend(ListenerGuard::on_window("pointermove", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        q.borrow_mut().push(InputEvent::PointerMoved {
            client: client_pos(pe),
            viewport: dom::window_viewport(),
        });
    }));

    let q = queue.clone();
    let canvas_capture = canvas.clone();
    guards.extend(ListenerGuard::new(canvas, "pointerdown", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if pe.button() != 0 {
            return;
        }
        _ = canvas_capture.set_pointer_capture(pe.pointer_id());
        q.borrow_mut().push(InputEvent::PointerDown {
            client: client_pos(pe),
            viewport: dom::window_viewport(),
        });
        ev.prevent_default();
    }));

    let q = queue.clone();
    guards.extend(ListenerGuard::on_window("pointerup", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if pe.button() != 0 {
            return;
        }
        q.borrow_mut().push(InputEvent::PointerUp {
            client: client_pos(pe),
            viewport: dom::window_viewport(),
        });
    }));

    let q = queue.clone();
    guards.extend(ListenerGuard::new(canvas, "pointerleave", move |_| {
        q.borrow_mut().push(InputEvent::PointerLeft);
    }));

    let q = queue;
    guards.extend(ListenerGuard::new(canvas, "wheel", move |ev| {
        let Some(we) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        q.borrow_mut().push(InputEvent::Wheel {
            delta_y: we.delta_y() as f32,
        });
        ev.prevent_default();
    }));

    log::info!("[input] {} listeners registered", guards.len());
    guards
}
