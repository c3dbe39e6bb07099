mod config;
mod extract;
mod lookup;
