use egui::{Color32, Painter, PointerButton, Pos2};
use log::{info, warn};

use crate::config::{AppConfig, Shortcuts};
use crate::handlers::{DragHandler, GroupHandler, SelectionHandler};
use crate::input::{InputEvent, InputHandler};
use crate::registry::ShapeRegistry;
use crate::shape::ShapeElement;

/// The board: owns the shapes and the selection, group and drag handlers
pub struct ShapesApp {
    registry: ShapeRegistry,
    selection: SelectionHandler,
    groups: GroupHandler,
    drag: DragHandler,
    input: InputHandler,
    shortcuts: Shortcuts,
    background: Color32,
}

impl ShapesApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let registry = ShapeRegistry::from_config(config);
        info!("Board ready with {} shapes", registry.len());
        Self::with_registry(config, registry)
    }

    /// Build the board around an existing set of shapes, without a window
    pub fn with_registry(config: &AppConfig, registry: ShapeRegistry) -> Self {
        let shortcuts = config.shortcuts().unwrap_or_else(|err| {
            warn!("{err}, using default shortcuts");
            Shortcuts::default()
        });

        Self {
            registry,
            selection: SelectionHandler::new(),
            groups: GroupHandler::new(),
            drag: DragHandler::new(),
            input: InputHandler::new(),
            shortcuts,
            background: config.background(),
        }
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionHandler {
        &self.selection
    }

    pub fn groups(&self) -> &GroupHandler {
        &self.groups
    }

    pub fn drag(&self) -> &DragHandler {
        &self.drag
    }

    /// Dispatch one input event to the handlers
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, modifiers } => {
                if !(modifiers.command || modifiers.ctrl) {
                    return;
                }
                if key == self.shortcuts.group {
                    self.groups.group(&self.selection.selected());
                } else if key == self.shortcuts.ungroup {
                    self.groups.ungroup(&self.selection.selected());
                }
            }
            InputEvent::PointerDown {
                position,
                button: PointerButton::Primary,
                modifiers,
            } => {
                let clicked = self.registry.shape_at(position);
                let related = clicked
                    .map(|id| self.groups.related_shapes(id))
                    .unwrap_or_default();

                self.selection.on_mouse_pressed(clicked, &related, modifiers.shift);
                self.drag.on_mouse_pressed(clicked);
            }
            InputEvent::PointerDown { .. } => {}
            InputEvent::PointerUp { .. } => self.drag.on_mouse_released(),
        }
    }

    /// Per-frame drag update against the current selection
    pub fn step(&mut self, pointer: Option<Pos2>) {
        let selected = self.selection.selected();
        self.drag.update(pointer, &selected, &mut self.registry);
    }

    /// Clear the canvas and draw every shape with its marks on top
    pub fn paint(&self, painter: &Painter) {
        painter.rect_filled(painter.clip_rect(), 0.0, self.background);

        for id in self.registry.ids() {
            let Some(shape) = self.registry.get(id) else {
                continue;
            };
            shape.draw(painter);

            let marks = [
                self.selection.build_selection_mark_if_selected(shape),
                self.groups.build_group_mark_if_has_group(shape),
            ];
            for mark in marks.iter().flatten() {
                mark.draw(painter);
            }
        }
    }
}

impl eframe::App for ShapesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.input.process_input(ctx) {
            self.handle_event(&event);
        }

        let pointer = self.input.pointer_position(ctx);
        self.step(pointer);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.paint(ui.painter());
            });

        // The drag delta is sampled per frame, so keep frames coming
        ctx.request_repaint();
    }
}
