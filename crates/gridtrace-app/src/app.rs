//! Browser shell: binds the host page's elements to a [`Surface`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gridtrace_core::sidebar::{self, SidebarEntry, SidebarView};
use gridtrace_core::{Surface, SurfaceUpdate};
use gridtrace_render::{RenderContext, Renderer, SceneRenderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, MouseEvent,
};

use crate::canvas2d::Canvas2dBackend;
use crate::config::AppConfig;
use crate::dom;
use crate::error::AppError;
use crate::shared::{read_state, with_state};
use crate::theme;

type SharedState = Rc<RefCell<AppState>>;

/// Elements supplied by the host page.
struct Elements {
    document: Document,
    canvas: HtmlCanvasElement,
    coords: HtmlElement,
    paths_list: HtmlElement,
    draw_mode_button: HtmlButtonElement,
    clear_button: HtmlButtonElement,
}

/// Runtime state shared by every event listener.
struct AppState {
    this: Weak<RefCell<AppState>>,
    surface: Surface,
    renderer: SceneRenderer,
    backend: Canvas2dBackend,
    elements: Elements,
    /// Hover listeners of the current sidebar entries, dropped on rebuild.
    entry_listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl AppState {
    /// Bring the page in line with a surface update.
    fn apply(&mut self, update: SurfaceUpdate) {
        if let Some(readout) = update.readout {
            self.elements.coords.set_text_content(Some(&readout.to_string()));
        }
        if update.draw_mode_changed {
            self.style_draw_mode_button();
        }
        if update.refresh_list {
            self.refresh_list();
        }
        if update.redraw {
            self.render();
        }
    }

    fn render(&mut self) {
        let ctx = RenderContext::new(&self.surface);
        self.renderer.build_scene(&ctx);
        self.backend.present(self.renderer.scene());
    }

    fn resize(&mut self) {
        let size = dom::resize_canvas(&self.elements.canvas);
        let update = self.surface.resize(size);
        self.apply(update);
    }

    fn style_draw_mode_button(&self) {
        let active = self.surface.draw_mode();
        let button: &Element = &self.elements.draw_mode_button;
        let (add, remove) = theme::draw_mode_classes(active);
        dom::set_class(button, add, true);
        dom::set_class(button, remove, false);

        match button.query_selector(&format!("#{}", theme::DRAW_MODE_TEXT_ID)) {
            Ok(Some(label)) => label.set_text_content(Some(theme::draw_mode_label(active))),
            Ok(None) => {}
            Err(err) => log::warn!("Failed to query draw-mode label: {err:?}"),
        }
    }

    /// Rebuild the sidebar from scratch.
    fn refresh_list(&mut self) {
        let view = self.surface.sidebar();
        self.entry_listeners.clear();
        self.elements.paths_list.set_inner_html("");
        dom::set_class(
            &self.elements.clear_button,
            theme::HIDDEN,
            !view.clear_button_visible(),
        );

        let result = match &view {
            SidebarView::Empty => self.append_placeholder(),
            SidebarView::Entries(entries) => entries
                .iter()
                .try_for_each(|entry| self.append_entry(entry)),
        };
        if let Err(err) = result {
            log::warn!("Failed to rebuild trace list: {err}");
        }
    }

    fn append_placeholder(&self) -> Result<(), AppError> {
        let item = dom::create_element(&self.elements.document, "li", theme::PLACEHOLDER)?;
        item.set_text_content(Some(sidebar::EMPTY_PLACEHOLDER));
        self.elements.paths_list.append_child(&item)?;
        Ok(())
    }

    fn append_entry(&mut self, entry: &SidebarEntry) -> Result<(), AppError> {
        let document = &self.elements.document;
        let index = entry.storage_index.to_string();

        let item = dom::create_element(document, "li", theme::ENTRY)?;
        item.set_attribute(theme::INDEX_ATTR, &index)?;
        item.set_attribute(theme::TRACE_ID_ATTR, &entry.id.to_string())?;
        dom::set_class(&item, theme::ENTRY_HOVER, entry.hovered);

        let label = dom::create_element(document, "span", theme::ENTRY_LABEL)?;
        label.set_text_content(Some(&entry.label));
        item.append_child(&label)?;

        let button = dom::create_element(document, "button", theme::DELETE_BUTTON)?;
        button.set_attribute(theme::INDEX_ATTR, &index)?;
        button.set_attribute("aria-label", sidebar::DELETE_LABEL)?;
        let icon = dom::create_element(document, "i", theme::DELETE_ICON)?;
        button.append_child(&icon)?;
        let tooltip = dom::create_element(document, "span", theme::TOOLTIP)?;
        tooltip.set_text_content(Some(sidebar::DELETE_LABEL));
        button.append_child(&tooltip)?;
        item.append_child(&button)?;

        self.bind_entry_hover(&item, entry.storage_index)?;
        self.elements.paths_list.append_child(&item)?;
        Ok(())
    }

    fn bind_entry_hover(&mut self, item: &Element, storage_index: usize) -> Result<(), AppError> {
        let enter = {
            let state = self.this.clone();
            let item = item.clone();
            Closure::<dyn FnMut(Event)>::new(move |_| {
                with_state(&state, |app| {
                    let update = app.surface.hover(Some(storage_index));
                    dom::set_class(&item, theme::ENTRY_HOVER, true);
                    app.apply(update);
                });
            })
        };
        item.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;

        let leave = {
            let state = self.this.clone();
            let item = item.clone();
            Closure::<dyn FnMut(Event)>::new(move |_| {
                with_state(&state, |app| {
                    let update = app.surface.hover(None);
                    dom::set_class(&item, theme::ENTRY_HOVER, false);
                    app.apply(update);
                });
            })
        };
        item.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;

        self.entry_listeners.push(enter);
        self.entry_listeners.push(leave);
        Ok(())
    }
}

/// A GridTrace widget mounted on a page.
#[wasm_bindgen]
pub struct GridTrace {
    state: SharedState,
}

#[wasm_bindgen]
impl GridTrace {
    /// Mount on the page. `config` is an optional object overriding
    /// [`AppConfig`] fields (element ids, `grid_size`, `style`).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GridTrace, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            AppConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::mount(config).map_err(|err| {
            log::error!("Failed to mount GridTrace: {err}");
            err.into()
        })
    }

    #[wasm_bindgen(js_name = toggleDrawMode)]
    pub fn toggle_draw_mode(&self) {
        self.with(|app| app.surface.toggle_draw_mode());
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self) {
        self.with(|app| app.surface.clear_all());
    }

    #[wasm_bindgen(js_name = traceCount)]
    pub fn trace_count(&self) -> usize {
        read_state(&self.state, |app| app.surface.traces().len())
    }

    #[wasm_bindgen(js_name = drawMode)]
    pub fn draw_mode(&self) -> bool {
        read_state(&self.state, |app| app.surface.draw_mode())
    }
}

impl GridTrace {
    /// Look up the elements, size the canvas, render once and bind listeners.
    pub fn mount(config: AppConfig) -> Result<Self, AppError> {
        let surface_config = config.surface_config()?;
        let document = dom::document()?;
        let elements = Elements {
            canvas: dom::get_element(&document, &config.canvas_id)?,
            coords: dom::get_element(&document, &config.coords_id)?,
            paths_list: dom::get_element(&document, &config.paths_list_id)?,
            draw_mode_button: dom::get_element(&document, &config.draw_mode_button_id)?,
            clear_button: dom::get_element(&document, &config.clear_button_id)?,
            document,
        };
        let backend = Canvas2dBackend::new(&elements.canvas)?;

        let state = Rc::new_cyclic(|this| {
            RefCell::new(AppState {
                this: this.clone(),
                surface: Surface::new(surface_config),
                renderer: SceneRenderer::new(),
                backend,
                elements,
                entry_listeners: Vec::new(),
            })
        });

        {
            let mut app = state.borrow_mut();
            app.resize();
            app.refresh_list();
        }
        bind_listeners(&state)?;

        log::info!(
            "Mounted on #{} (grid {}px)",
            config.canvas_id,
            surface_config.grid_size
        );
        Ok(Self { state })
    }

    fn with(&self, f: impl FnOnce(&mut AppState) -> SurfaceUpdate) {
        with_state(&Rc::downgrade(&self.state), |app| {
            let update = f(app);
            app.apply(update);
        });
    }
}

/// Listener that maps a mouse event to a surface operation.
fn mouse_listener(
    state: &SharedState,
    op: fn(&mut Surface, kurbo::Point) -> SurfaceUpdate,
) -> Closure<dyn FnMut(MouseEvent)> {
    let state = Rc::downgrade(state);
    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        with_state(&state, |app| {
            let point = dom::event_to_point(&app.elements.canvas, &event);
            let update = op(&mut app.surface, point);
            app.apply(update);
        });
    })
}

/// Listener that runs a surface operation without event data.
fn action_listener(
    state: &SharedState,
    op: fn(&mut AppState) -> SurfaceUpdate,
) -> Closure<dyn FnMut(Event)> {
    let state = Rc::downgrade(state);
    Closure::<dyn FnMut(Event)>::new(move |_| {
        with_state(&state, |app| {
            let update = op(app);
            app.apply(update);
        });
    })
}

/// Install the page-lifetime listeners. They are leaked on purpose: the
/// widget lives as long as the page.
fn bind_listeners(state: &SharedState) -> Result<(), AppError> {
    let app = state.borrow();
    let canvas = &app.elements.canvas;

    let listeners = [
        ("mousedown", mouse_listener(state, Surface::pointer_down)),
        ("mouseup", mouse_listener(state, Surface::pointer_up)),
        ("mousemove", mouse_listener(state, Surface::pointer_move)),
    ];
    for (name, listener) in listeners {
        canvas.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    let onleave = action_listener(state, |app| app.surface.pointer_leave());
    canvas.add_event_listener_with_callback("mouseout", onleave.as_ref().unchecked_ref())?;
    onleave.forget();

    let ontoggle = action_listener(state, |app| app.surface.toggle_draw_mode());
    app.elements
        .draw_mode_button
        .add_event_listener_with_callback("click", ontoggle.as_ref().unchecked_ref())?;
    ontoggle.forget();

    let onclear = action_listener(state, |app| app.surface.clear_all());
    app.elements
        .clear_button
        .add_event_listener_with_callback("click", onclear.as_ref().unchecked_ref())?;
    onclear.forget();

    let ondelete = delete_listener(state);
    app.elements
        .paths_list
        .add_event_listener_with_callback("click", ondelete.as_ref().unchecked_ref())?;
    ondelete.forget();

    let window = web_sys::window().ok_or(AppError::NoDocument)?;
    let onresize = action_listener(state, |app| {
        app.resize();
        SurfaceUpdate::NONE
    });
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();

    Ok(())
}

/// Delegated click on the list: deletes the entry whose button was hit.
fn delete_listener(state: &SharedState) -> Closure<dyn FnMut(Event)> {
    let state = Rc::downgrade(state);
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(index) = clicked_delete_index(&event) else {
            return;
        };
        with_state(&state, |app| {
            let update = app.surface.delete_at(index);
            app.apply(update);
        });
    })
}

fn clicked_delete_index(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target
        .closest(&format!(".{}", theme::DELETE_BUTTON_MARKER))
        .ok()??;
    button.get_attribute(theme::INDEX_ATTR)?.parse().ok()
}
