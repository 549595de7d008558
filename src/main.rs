//! Circle Field entry point
//!
//! The browser build wires DOM events to the scene; the native build writes a
//! demo layout as SVG to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, MouseEvent};

    use circle_field::placement::{Area, seeded_rng};
    use circle_field::render::{SVG_NS, circle_attributes};
    use circle_field::{AppError, Scene, Settings};

    /// Page elements the app talks to
    struct Dom {
        document: Document,
        svg: Element,
        input: HtmlInputElement,
        input_wrap: Element,
        error: Element,
        mouse_pos: Element,
    }

    impl Dom {
        fn locate(document: Document) -> Option<Self> {
            let by_id = |id: &str| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::error!("Missing #{} element", id);
                }
                el
            };
            Some(Self {
                svg: by_id("view")?,
                input: by_id("input")?.dyn_into::<HtmlInputElement>().ok()?,
                input_wrap: by_id("input-wrap")?,
                error: by_id("error")?,
                mouse_pos: by_id("mouse-position")?,
                document,
            })
        }

        fn show_error(&self, msg: &str) {
            let _ = self.input_wrap.class_list().add_1("error");
            self.error.set_text_content(Some(msg));
        }

        fn clear_error(&self) {
            let _ = self.input_wrap.class_list().remove_1("error");
            self.error.set_text_content(Some(""));
        }
    }

    /// App instance holding all state
    struct App {
        scene: Scene,
        settings: Settings,
        rng: Pcg32,
        dom: Dom,
        /// One SVG node per circle, same order as the scene layout
        circle_els: Vec<Element>,
    }

    impl App {
        fn submit(&mut self, raw: &str) {
            let result = self.scene.submit(raw, &mut self.rng).map(|c| c.len());

            if let Err(AppError::Input(e)) = &result {
                self.dom.show_error(&e.to_string());
                return;
            }

            // Valid count: the previous render goes away either way
            self.dom.svg.set_inner_html("");
            self.circle_els.clear();

            match result {
                Ok(count) => {
                    self.dom.clear_error();
                    self.render_circles();
                    if self.settings.record_count(count as u32) {
                        self.settings.save();
                    }
                }
                Err(e) => {
                    log::warn!("{}", e);
                    self.dom.show_error(&e.to_string());
                }
            }
        }

        fn render_circles(&mut self) {
            let radius = self.scene.config().radius;
            for circle in self.scene.layout() {
                let el = match self.dom.document.create_element_ns(Some(SVG_NS), "circle") {
                    Ok(el) => el,
                    Err(e) => {
                        log::error!("Could not create circle element: {:?}", e);
                        return;
                    }
                };
                for (name, value) in circle_attributes(circle.pos, circle.color, radius) {
                    let _ = el.set_attribute(name, &value);
                }
                let _ = self.dom.svg.append_child(&el);
                self.circle_els.push(el);
            }
        }

        fn move_circle(&self, index: usize, center: Vec2) {
            if let Some(el) = self.circle_els.get(index) {
                let _ = el.set_attribute("cx", &center.x.to_string());
                let _ = el.set_attribute("cy", &center.y.to_string());
            }
        }

        fn update_readout(&self) {
            if !self.settings.show_pointer_readout {
                return;
            }
            if let Some(text) = self.scene.pointer_readout() {
                self.dom.mouse_pos.set_text_content(Some(&text));
            }
        }
    }

    fn pointer_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Circle Field starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(dom) = Dom::locate(document) else {
            return;
        };

        // Surface size is read once; later resizes are not tracked
        let area = Area::new(dom.svg.client_width() as f32, dom.svg.client_height() as f32);
        log::info!("Surface is {}x{}", area.width, area.height);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Layout seed: {}", seed);

        let startup = settings.startup_count();
        let app = Rc::new(RefCell::new(App {
            scene: Scene::new(area, settings.placement),
            settings,
            rng: seeded_rng(seed),
            dom,
            circle_els: Vec::new(),
        }));

        setup_input_handler(app.clone());
        setup_pointer_handlers(app.clone());

        if let Some(count) = startup {
            let mut a = app.borrow_mut();
            let raw = count.to_string();
            a.dom.input.set_value(&raw);
            a.submit(&raw);
            log::info!("Restored last count {}", count);
        }

        log::info!("Circle Field running!");
    }

    fn setup_input_handler(app: Rc<RefCell<App>>) {
        let input = app.borrow().dom.input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            let raw = a.dom.input.value();
            a.submit(&raw);
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) {
        let svg = app.borrow().dom.svg.clone();

        // Press over a circle picks it up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if let Some(index) = a.scene.pointer_down(pointer_pos(&event)) {
                    log::debug!("Dragging circle {}", index);
                }
            });
            let _ = svg.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Move updates the readout and the held circle
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let moved = a.scene.pointer_move(pointer_pos(&event));
                a.update_readout();
                if let Some((index, center)) = moved {
                    a.move_circle(index, center);
                }
            });
            let _ = svg.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release drops it
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().scene.pointer_up();
            });
            let _ = svg.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_field::consts::*;
    use circle_field::placement::{Area, place};
    use circle_field::render::write_document;
    use circle_field::Settings;

    env_logger::init();
    log::info!("Circle Field (native) starting...");
    log::info!("Dragging needs the browser build - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let area = Area::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT);
    let count = settings.startup_count().unwrap_or(DEMO_COUNT);

    match place(count as usize, &area, &settings.placement, &mut rand::rng()) {
        Ok(circles) => {
            log::info!("Placed {} circles on {}x{}", circles.len(), area.width, area.height);
            let stdout = std::io::stdout().lock();
            if let Err(e) = write_document(stdout, &circles, &area, settings.placement.radius) {
                log::error!("Could not write SVG: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
