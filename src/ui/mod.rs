// toolmarks terminal UI
// Command parsing, text rendering, palettes and the notice queue.

pub mod commands;
pub mod render;
pub mod theme;
pub mod toaster;
