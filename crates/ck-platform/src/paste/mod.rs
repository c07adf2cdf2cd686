mod xdotool;

pub use xdotool::XdotoolPasteSimulator;
