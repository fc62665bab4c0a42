pub mod assets;
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod pages;
pub mod table;
pub mod web;
