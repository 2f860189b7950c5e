//! Extracurricular activity roster for Mergington High School: an in-memory
//! registry of activities with signup and unregister by student email, served
//! as a small JSON API.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
