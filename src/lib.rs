pub mod cli;
pub mod gemini;
pub mod prompts;
pub mod run;

pub const MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_OUTPUT_DIR: &str = "public/images/home";
