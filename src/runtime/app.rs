//! Window management and the event loop driver
//!
//! `App` owns the model and routes winit events through three layers:
//! 1. raw event -> input routing (keymap lookup or hit-test)
//! 2. routed `Msg` -> `update()` (pure state transition)
//! 3. returned `Cmd` -> side effect (redraw, slide decode, exit)
//!
//! Slide decodes run on worker threads and come back as messages over an
//! mpsc channel, drained in `about_to_wait`.

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use crate::commands::Cmd;
use crate::image;
use crate::keymap::{keystroke_from_winit, Keymap};
use crate::messages::{AppMsg, CarouselMsg, Msg, UiMsg};
use crate::model::AppModel;
use crate::update::update;
use crate::view::geometry::in_controls_region;
use crate::view::{hit_test_ui, HitTarget, Point, Renderer};

use super::input::handle_modal_key;

pub struct App {
    model: AppModel,
    keymap: Keymap,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Point,
    last_title: String,
    // Slides with a decode already in flight, so a rapid run of
    // transitions does not decode the same file twice
    loading: HashSet<usize>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(model: AppModel, keymap: Keymap) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            keymap,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: Point::default(),
            last_title: String::new(),
            loading: HashSet::new(),
            msg_tx,
            msg_rx,
        }
    }

    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd, event_loop);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, event_loop: &ActiveEventLoop) {
        match cmd {
            Cmd::Redraw => self.request_redraw(),
            Cmd::LoadSlides(indices) => {
                self.spawn_loads(indices);
                self.request_redraw();
            }
            Cmd::Quit => event_loop.exit(),
        }
    }

    /// Decode slides on worker threads; results arrive as `SlideLoaded`
    /// messages on the channel.
    fn spawn_loads(&mut self, indices: Vec<usize>) {
        for index in indices {
            if !self.loading.insert(index) {
                continue;
            }
            let Some(slot) = self.model.deck.get(index) else {
                continue;
            };
            let path = slot.path.clone();
            let tx = self.msg_tx.clone();
            std::thread::spawn(move || {
                tracing::debug!("Decoding slide {} from {}", index, path.display());
                let result = image::load_slide(&path);
                let _ = tx.send(Msg::App(AppMsg::SlideLoaded { index, result }));
            });
        }
    }

    fn process_async_messages(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Msg::App(AppMsg::SlideLoaded { index, .. }) = &msg {
                self.loading.remove(index);
            }
            self.dispatch(msg, event_loop);
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::resize(size.width, size.height),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                self.handle_key_event(event)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Point::new(position.x, position.y);
                let (w, h) = self.model.window_size;
                let hot = in_controls_region(w, h, position.x as f32, position.y as f32);
                update(&mut self.model, Msg::Ui(UiMsg::SetControlsHot(hot)))
            }
            WindowEvent::CursorLeft { .. } => {
                update(&mut self.model, Msg::Ui(UiMsg::SetControlsHot(false)))
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_left_click(),
            WindowEvent::RedrawRequested => {
                self.redraw();
                None
            }
            _ => None,
        }
    }

    fn handle_key_event(&mut self, event: &winit::event::KeyEvent) -> Option<Cmd> {
        // Focus capture: an open modal swallows the keyboard
        if self.model.ui.has_modal() {
            return handle_modal_key(&mut self.model, &event.logical_key);
        }

        let keystroke = keystroke_from_winit(
            &event.logical_key,
            self.modifiers.control_key(),
            self.modifiers.shift_key(),
            self.modifiers.alt_key(),
            self.modifiers.super_key(),
        )?;
        let command = self.keymap.handle_keystroke(keystroke)?;
        let msg = command.to_msg()?;
        update(&mut self.model, msg)
    }

    fn handle_left_click(&mut self) -> Option<Cmd> {
        let target = hit_test_ui(&self.model, &self.keymap, self.mouse_position)?;
        let msg = match target {
            // Clicking the dimmed surround closes the modal; clicking the
            // panel itself does nothing
            HitTarget::Modal { inside: false } => Msg::Ui(UiMsg::CloseModal),
            HitTarget::Modal { inside: true } => return None,
            HitTarget::PrevButton => Msg::Carousel(CarouselMsg::Prev),
            HitTarget::NextButton => Msg::Carousel(CarouselMsg::Next),
            HitTarget::Dot { slide_index } => Msg::go_to(slide_index),
            HitTarget::Stage => return None,
        };
        update(&mut self.model, msg)
    }

    fn redraw(&mut self) {
        let title = self.model.window_title();
        if title != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.last_title = title;
        }

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.model, &self.keymap) {
                tracing::error!("Render failed: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.model.window_size;
            let window_attributes = Window::default_attributes()
                .with_title(self.model.window_title())
                .with_inner_size(LogicalSize::new(width, height));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();
            let renderer = Renderer::new(&context, Rc::clone(&window)).unwrap();

            self.renderer = Some(renderer);
            self.window = Some(window);
            self.context = Some(context);

            // Kick off decoding for the starting slide and its neighbors
            let targets = self.model.deck.preload_targets(self.model.carousel.current());
            self.spawn_loads(targets);
            self.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(id) = self.window.as_ref().map(|w| w.id()) else {
            return;
        };
        if window_id != id {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.process_cmd(cmd, event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        self.process_async_messages(event_loop);
    }
}
