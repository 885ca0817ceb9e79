// Engine modules: renderer, physics, input, audio, frame clock

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
