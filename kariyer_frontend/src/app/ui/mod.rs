mod cv;
mod forum;
mod interview;
mod settings;
