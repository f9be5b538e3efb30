//! Level-triggered input state built from terminal events.
//!
//! The engine samples "is the button held right now" once per frame, while a
//! terminal delivers discrete press/release events. `InputState` bridges the
//! two:
//!
//! - the primary button is held from `Down(Left)` until `Up(Left)`;
//! - a press that starts and ends between two frames still counts as held for
//!   the next sampled frame, at the position it was pressed;
//! - most terminals never report key releases, so the restart key counts as
//!   held only for the frame after its press (or repeat), unless a release
//!   event has been seen, in which case it is held until that release.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::map::{handle_key_event, Command};
use crate::types::FrameInput;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last pointer cell (column, row)
    pointer: (u16, u16),
    /// Where the latest unsampled press landed
    press_cell: Option<(u16, u16)>,
    primary_held: bool,
    primary_latched: bool,
    restart_held: bool,
    restart_latched: bool,
    /// Set once the terminal reports any key release
    key_release_supported: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event. Returns `Some(Command::Quit)` when the user
    /// asked to leave; restart is folded into the sampled state instead.
    pub fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse);
                None
            }
            Event::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let cell = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = cell;
                self.press_cell = Some(cell);
                self.primary_held = true;
                self.primary_latched = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer = cell;
                self.primary_held = false;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer = cell;
                self.primary_held = true;
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = cell;
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let command = handle_key_event(key);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => match command {
                Some(Command::Restart) => {
                    self.restart_held = true;
                    self.restart_latched = true;
                    None
                }
                other => other,
            },
            KeyEventKind::Release => {
                self.key_release_supported = true;
                if command == Some(Command::Restart) {
                    self.restart_held = false;
                }
                None
            }
        }
    }

    /// Pointer cell as last reported by the terminal
    pub fn pointer_cell(&self) -> (u16, u16) {
        self.pointer
    }

    pub fn primary_held(&self) -> bool {
        self.primary_held
    }

    /// Sample this frame's input.
    ///
    /// `project` maps a terminal cell to surface coordinates; cells outside the
    /// play area map to `None` and are reported as `(-1, -1)`, which no tile
    /// contains.
    pub fn sample(&self, project: impl Fn(u16, u16) -> Option<(i32, i32)>) -> FrameInput {
        let (col, row) = self.press_cell.unwrap_or(self.pointer);
        FrameInput {
            pointer: project(col, row).unwrap_or((-1, -1)),
            primary_pressed: self.primary_held || self.primary_latched,
            restart_pressed: self.restart_held || self.restart_latched,
        }
    }

    /// Drop per-frame latches. Call once after the engine consumed `sample`.
    pub fn end_frame(&mut self) {
        self.primary_latched = false;
        self.press_cell = None;
        self.restart_latched = false;
        if !self.key_release_supported {
            self.restart_held = false;
        }
    }
}
