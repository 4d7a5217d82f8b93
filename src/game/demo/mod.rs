// Terminal front end for the engine: board rendering and an interactive
// game loop driven by stdin.
pub mod game_loop;
pub mod render;
