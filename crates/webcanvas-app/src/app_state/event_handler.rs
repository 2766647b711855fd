//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, WindowAttributes, WindowId};

use webcanvas_common::actions::Action;
use webcanvas_common::events::Event;
use webcanvas_common::types::{Point, Rect};
use webcanvas_webview::{WebViewManager, WebViewRegistry};

use super::core::CanvasApp;
use super::drag::{cursor_zone, hit_target, CursorZone, DragState, HitTarget};
use super::refresh::POLL_INTERVAL;

impl ApplicationHandler for CanvasApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.webviews = Some(WebViewRegistry::new(WebViewManager::new()));
        self.create_url_bar();
        tracing::info!("Window created");

        // Pages requested on the command line
        for url in std::mem::take(&mut self.startup_urls) {
            self.dispatch(Action::AddPage(url));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.event_bus.publish(Event::Shutdown);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_url_bar_bounds();
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_mouse_wheel(delta);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_refresh_timers(now);
        }

        // Wake for the next refresh deadline if it lands before the
        // baseline polling tick.
        let mut wake = now + POLL_INTERVAL;
        if let Some(deadline) = self.next_refresh_deadline() {
            wake = wake.min(deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}

impl CanvasApp {
    /// Handle cursor movement: advance an active drag, or update the
    /// cursor icon for whatever is under the pointer.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);

        // Modal dialog suspends canvas interaction
        if self.dialog.is_some() {
            return;
        }

        if let Some(drag) = self.drag.clone() {
            let p = self.scene_point(x, y);
            match drag {
                DragState::MovePage { page, last } => {
                    self.scene.move_page(page, p.x - last.x, p.y - last.y);
                    self.drag = Some(DragState::MovePage { page, last: p });
                    self.sync_webview_bounds();
                }
                DragState::ResizePage { page, corner } => {
                    self.scene.resize_page(page, corner, p);
                    self.sync_webview_bounds();
                }
                DragState::RubberBand { origin, .. } => {
                    self.drag = Some(DragState::RubberBand { origin, current: p });
                }
            }
            return;
        }

        // Not dragging — update the cursor icon
        let icon = if self.canvas_region().contains(Point::new(x, y)) {
            let p = self.scene_point(x, y);
            let target = hit_target(&self.scene, p, self.config.canvas.frame_width);
            match cursor_zone(target) {
                CursorZone::NwResize => CursorIcon::NwResize,
                CursorZone::NeResize => CursorIcon::NeResize,
                CursorZone::SwResize => CursorIcon::SwResize,
                CursorZone::SeResize => CursorIcon::SeResize,
                CursorZone::Move => CursorIcon::Move,
                CursorZone::None => CursorIcon::Default,
            }
        } else {
            CursorIcon::Default
        };

        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    /// Handle mouse button press/release: start or finish a drag, open
    /// or dismiss the context menu.
    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if self.dialog.is_some() {
            return;
        }
        let (x, y) = self.cursor_pos;

        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                // A click outside the menu dismisses it; clicks inside it
                // land in the menu webview and never reach here.
                if self.menu.is_some() {
                    self.close_context_menu();
                }
                if !self.canvas_region().contains(Point::new(x, y)) {
                    return;
                }

                let p = self.scene_point(x, y);
                match hit_target(&self.scene, p, self.config.canvas.frame_width) {
                    HitTarget::Handle(page, corner) => {
                        self.drag = Some(DragState::ResizePage { page, corner });
                    }
                    HitTarget::Body(page) => {
                        self.scene.select_only(page);
                        self.apply_selection_styles();
                        self.event_bus.publish(Event::SelectionChanged);
                        self.drag = Some(DragState::MovePage { page, last: p });
                    }
                    HitTarget::Empty => {
                        self.scene.clear_selection();
                        self.apply_selection_styles();
                        self.drag = Some(DragState::RubberBand {
                            origin: p,
                            current: p,
                        });
                    }
                }
            }

            (MouseButton::Left, ElementState::Released) => {
                // Every drag variant ends on release; only the rubber band
                // has work left to do.
                if let Some(DragState::RubberBand { origin, current }) = self.drag.take() {
                    let band = Rect::from_corners(origin, current);
                    let matched = self.scene.select_in_rect(&band);
                    self.apply_selection_styles();
                    self.event_bus.publish(Event::SelectionChanged);
                    tracing::debug!(matched, "Rubber-band selection");
                }
                if let Some(ref w) = self.window {
                    w.set_cursor(CursorIcon::Default);
                }
            }

            (MouseButton::Right, ElementState::Pressed) => {
                if !self.canvas_region().contains(Point::new(x, y)) {
                    return;
                }
                let p = self.scene_point(x, y);
                if let Some(page) = self.scene.hit_test(p) {
                    self.open_context_menu(page, Point::new(x, y));
                }
            }

            _ => {}
        }
    }

    /// Scroll pans the canvas; Ctrl+scroll zooms about the cursor.
    fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        if self.dialog.is_some() {
            return;
        }
        let (x, y) = self.cursor_pos;
        let region = self.canvas_region();
        if !region.contains(Point::new(x, y)) {
            return;
        }

        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(dx, dy) => (dx as f64 * 40.0, dy as f64 * 40.0),
            MouseScrollDelta::PixelDelta(pos) => (pos.x, pos.y),
        };

        if self.modifiers.control_key() {
            let factor = (dy / 200.0).exp();
            let anchor = Point::new(x - region.x, y - region.y);
            self.viewport.zoom_at(factor, anchor);
        } else {
            self.viewport.pan_by(dx, dy);
        }
        self.sync_webview_bounds();
    }

    /// Keys the panels don't consume themselves: Escape dismisses the
    /// context menu. The dialog handles its own Escape in HTML.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        if let Key::Named(NamedKey::Escape) = event.logical_key {
            if self.menu.is_some() {
                self.close_context_menu();
            }
        }
    }
}
