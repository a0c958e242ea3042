// src/lib.rs

//! Club Crawler Library
//!
//! Scrapes the PES University campus club listing, visits every club page and
//! collects the results into one JSON document.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
