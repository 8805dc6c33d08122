//! Application Layer - Use Cases

pub mod config;
pub mod process_input;
pub mod recognize_drawing;

pub use process_input::{ProcessInputInput, ProcessInputOutput, ProcessInputUseCase};
pub use recognize_drawing::RecognizeDrawingUseCase;
