// Console-facing collaborators of the catalog: the menu session and output rendering.

pub mod one_shot;
pub mod render;
pub mod session;
