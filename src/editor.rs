mod functions;
mod words;

pub use functions::EditorFunction;
