mod obscuration;
mod scenes;
mod setup;
