use egui::{Context, Key, Modifiers, PointerButton, Pos2};

/// Input events the board reacts to, independent of how they were delivered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Mouse button was released
    PointerUp {
        position: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Key was pressed (repeats excluded)
    KeyDown { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    pub fn modifiers(&self) -> Modifiers {
        match self {
            InputEvent::PointerDown { modifiers, .. }
            | InputEvent::PointerUp { modifiers, .. }
            | InputEvent::KeyDown { modifiers, .. } => *modifiers,
        }
    }
}

/// Handles converting raw egui input into our InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's key and button edges from egui
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            if let Some(pos) = input.pointer.latest_pos() {
                self.last_pointer_pos = Some(pos);
            }
            input.events.iter().filter_map(translate_event).collect()
        })
    }

    /// Latest known pointer position, kept while the pointer is outside the window
    pub fn pointer_position(&mut self, ctx: &Context) -> Option<Pos2> {
        if let Some(pos) = ctx.input(|input| input.pointer.latest_pos()) {
            self.last_pointer_pos = Some(pos);
        }
        self.last_pointer_pos
    }
}

fn translate_event(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } => Some(InputEvent::KeyDown {
            key: *key,
            modifiers: *modifiers,
        }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers,
        } => {
            let (position, button, modifiers) = (*pos, *button, *modifiers);
            Some(if *pressed {
                InputEvent::PointerDown { position, button, modifiers }
            } else {
                InputEvent::PointerUp { position, button, modifiers }
            })
        }
        _ => None,
    }
}
