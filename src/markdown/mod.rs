// markdown module: deterministic Markdown rendering of a fetched thread

pub mod renderer;

pub use renderer::{PROFILE_BASE_URL, RenderOptions, author_mention, render};
